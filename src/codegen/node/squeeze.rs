//! Squeeze. The axes input is optional; absent axes squeeze every
//! singleton dimension.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let x = ctx.input(node, 0, "data")?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(x, node)?;

    let axes = match ctx.optional_input(node, 1)? {
        Some(axes_input) => args::runtime_slice(
            ctx,
            "isize",
            format!("axes_{}", y.ident()),
            axes_input,
        ),
        None => "null".to_string(),
    };

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(axes);
    call.push(resolver::pointer(y));
    ctx.kernel("squeeze", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
