//! MaxPool and AveragePool. Window, strides, and pads carry no defaults;
//! emission fails when any of them is absent.

use super::conv::AUTO_PAD_MODES;
use super::prelude::*;

struct PoolAttrs {
    kernel_shape: Vec<i64>,
    strides: Vec<i64>,
    pads: Vec<i64>,
    dilations: Vec<i64>,
    auto_pad: String,
}

impl PoolAttrs {
    fn read(node: &ReadyNode) -> Result<Self, EmitError> {
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
        let kernel_shape = reader.require_ints("kernel_shape")?;
        let strides = reader.require_ints("strides")?;
        let pads = reader.require_ints("pads")?;
        // dilations fall back to 4-D ones
        let dilations = reader.ints("dilations")?.unwrap_or_else(|| vec![1; 4]);
        Ok(Self {
            kernel_shape,
            strides,
            pads,
            dilations,
            auto_pad,
        })
    }
}

pub(crate) fn emit_max(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let x = ctx.input(node, 0, "X")?;
    let y = ctx.output(node, 0)?;
    let attrs = PoolAttrs::read(node)?;
    let reader = AttrReader::new(node);
    let ceil_mode = reader.int("ceil_mode", 0)?;
    let storage_order = reader.int("storage_order", 0)?;
    let token = resolver::token(x, node)?;

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(resolver::pointer(y));
    call.push(args::usize_array(&attrs.kernel_shape));
    call.push(args::usize_array(&attrs.strides));
    call.push(args::usize_array(&attrs.pads));
    call.push(args::usize_array(&attrs.dilations));
    call.push(ceil_mode.to_string());
    call.push(storage_order.to_string());
    call.push(args::str_lit(&attrs.auto_pad));
    ctx.kernel("max_pool", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}

pub(crate) fn emit_avg(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let x = ctx.input(node, 0, "X")?;
    let y = ctx.output(node, 0)?;
    let attrs = PoolAttrs::read(node)?;
    let count_include_pad = AttrReader::new(node).int("count_include_pad", 0)?;
    let token = resolver::token(x, node)?;

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(resolver::pointer(y));
    call.push(args::usize_array(&attrs.kernel_shape));
    call.push(args::usize_array(&attrs.strides));
    call.push(args::usize_array(&attrs.pads));
    call.push(args::usize_array(&attrs.dilations));
    call.push(count_include_pad.to_string());
    call.push(args::str_lit(&attrs.auto_pad));
    ctx.kernel("avg_pool", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
