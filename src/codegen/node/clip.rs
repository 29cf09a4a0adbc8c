//! Clip. Absent min/max bounds are unbounded and render as `null`.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let x = ctx.input(node, 0, "input")?;
    let min = ctx.optional_input(node, 1)?;
    let max = ctx.optional_input(node, 2)?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(x, node)?;

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(args::null_or_pointer(min));
    call.push(args::null_or_pointer(max));
    call.push(resolver::pointer(y));
    ctx.kernel("clip", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
