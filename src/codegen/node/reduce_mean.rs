//! ReduceMean. Axes come from the attribute when present, otherwise from
//! the optional axes input, otherwise the reduction spans all axes.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let reader = AttrReader::new(node);
    let keepdims = reader.int("keepdims", 1)?;
    let noop_with_empty_axes = reader.int("noop_with_empty_axes", 0)?;
    let attr_axes = reader.ints("axes")?;

    let x = ctx.input(node, 0, "data")?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(x, node)?;

    let axes = match attr_axes {
        Some(axes) => args::usize_array(&axes),
        None => match ctx.optional_input(node, 1)? {
            Some(axes_input) => args::runtime_slice(
                ctx,
                "isize",
                format!("axes_{}", y.ident()),
                axes_input,
            ),
            None => "null".to_string(),
        },
    };

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(axes);
    call.push(keepdims.to_string());
    call.push(noop_with_empty_axes.to_string());
    call.push(resolver::pointer(y));
    ctx.kernel("reduce_mean", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
