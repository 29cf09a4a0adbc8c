//! Flatten into a 2-D view around the given axis.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let axis = AttrReader::new(node).int("axis", 1)?;
    let x = ctx.input(node, 0, "input")?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(x, node)?;

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(axis.to_string());
    call.push(resolver::pointer(y));
    ctx.kernel("flatten", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
