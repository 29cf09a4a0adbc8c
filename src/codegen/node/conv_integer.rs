//! Quantized convolution over u8/i8 inputs with an i32 accumulator.

use super::conv::ConvAttrs;
use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let x = ctx.input(node, 0, "x")?;
    let w = ctx.input(node, 1, "w")?;
    // zero points default to null, treated as 0 by the kernel
    let x_zero_point = ctx.optional_input(node, 2)?;
    let w_zero_point = ctx.optional_input(node, 3)?;
    let y = ctx.output(node, 0)?;

    let token = resolver::token(x, node)?;
    if token != "u8" && token != "i8" {
        return Err(EmitError::UnsupportedMode {
            node: node.name.clone(),
            op: node.op_type.clone(),
            attr: "T".to_string(),
            value: token.to_string(),
        });
    }
    let spatial_rank = x.shape.len().saturating_sub(2);
    let attrs = ConvAttrs::read(node, spatial_rank)?;

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push("i32".to_string());
    call.push(resolver::pointer(x));
    call.push(resolver::pointer(w));
    call.push(args::null_or_pointer(x_zero_point));
    call.push(args::null_or_pointer(w_zero_point));
    call.push(resolver::pointer(y));
    call.push(args::usize_array(&attrs.strides));
    call.push(args::usize_array(&attrs.pads));
    call.push(args::usize_array(&attrs.dilations));
    call.push(attrs.group.to_string());
    call.push(args::str_lit(&attrs.auto_pad));
    ctx.kernel("conv_integer", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
