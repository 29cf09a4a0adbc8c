//! Slice. starts/ends are required, axes/steps optional; all int64 tensor
//! data becomes i64 slices with scoped releases.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let x = ctx.input(node, 0, "data")?;
    let starts = ctx.input(node, 1, "starts")?;
    let ends = ctx.input(node, 2, "ends")?;
    let axes = ctx.optional_input(node, 3)?;
    let steps = ctx.optional_input(node, 4)?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(x, node)?;

    let starts_local = args::runtime_slice(ctx, "i64", format!("starts_{}", y.ident()), starts);
    let ends_local = args::runtime_slice(ctx, "i64", format!("ends_{}", y.ident()), ends);
    let axes_arg = match axes {
        Some(axes) => args::runtime_slice(ctx, "i64", format!("axes_{}", y.ident()), axes),
        None => "null".to_string(),
    };
    let steps_arg = match steps {
        Some(steps) => args::runtime_slice(ctx, "i64", format!("steps_{}", y.ident()), steps),
        None => "null".to_string(),
    };

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(starts_local);
    call.push(ends_local);
    call.push(axes_arg);
    call.push(steps_arg);
    call.push(resolver::pointer(y));
    ctx.kernel("slice", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
