//! Gather. Index data is int64 on the wire and is cast to the unsigned
//! index type at emission.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let axis = AttrReader::new(node).int("axis", 0)?;
    let x = ctx.input(node, 0, "data")?;
    let indices = ctx.input(node, 1, "indices")?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(x, node)?;

    let local = args::runtime_slice(ctx, "usize", format!("indices_{}", y.ident()), indices);

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(local);
    call.push(axis.to_string());
    call.push(resolver::pointer(y));
    ctx.kernel("gather", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
