//! Convolution.

use super::prelude::*;

pub(super) const AUTO_PAD_MODES: [&str; 4] = ["NOTSET", "SAME_UPPER", "SAME_LOWER", "VALID"];

/// Attribute contract shared by Conv and ConvInteger. Strides are mandatory
/// with no default fallback; pads and dilations default to zeros and ones of
/// the spatial rank. An explicitly empty pads list stays empty and renders
/// as the empty-slice marker, distinct from an absent list.
pub(super) struct ConvAttrs {
    pub strides: Vec<i64>,
    pub pads: Vec<i64>,
    pub dilations: Vec<i64>,
    pub group: i64,
    pub auto_pad: String,
}

impl ConvAttrs {
    pub(super) fn read(node: &ReadyNode, spatial_rank: usize) -> Result<Self, EmitError> {
        let reader = AttrReader::new(node);
        let auto_pad = reader.string("auto_pad", "NOTSET")?;
        if !AUTO_PAD_MODES.contains(&auto_pad.as_str()) {
            return Err(EmitError::UnsupportedMode {
                node: node.name.clone(),
                op: node.op_type.clone(),
                attr: "auto_pad".to_string(),
                value: auto_pad,
            });
        }
        let strides = reader.require_ints("strides")?;
        let pads = reader.ints("pads")?.unwrap_or_else(|| vec![0; spatial_rank * 2]);
        let dilations = reader.ints("dilations")?.unwrap_or_else(|| vec![1; spatial_rank]);
        let group = reader.int("group", 1)?;
        // kernel_shape is inferred from the weight tensor; only its type tag
        // is enforced here
        let _ = reader.ints("kernel_shape")?;
        Ok(Self {
            strides,
            pads,
            dilations,
            group,
            auto_pad,
        })
    }
}

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let x = ctx.input(node, 0, "X")?;
    let w = ctx.input(node, 1, "W")?;
    let bias = ctx.optional_input(node, 2)?;
    let y = ctx.output(node, 0)?;
    let spatial_rank = x.shape.len().saturating_sub(2);
    let attrs = ConvAttrs::read(node, spatial_rank)?;
    let token = resolver::token(x, node)?;

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(resolver::pointer(w));
    call.push(args::null_or_pointer(bias));
    call.push(resolver::pointer(y));
    call.push(args::usize_array(&attrs.strides));
    call.push(args::usize_array(&attrs.pads));
    call.push(args::usize_array(&attrs.dilations));
    call.push(attrs.group.to_string());
    call.push(args::str_lit(&attrs.auto_pad));
    ctx.kernel("conv", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
