//! Unsqueeze. Axes come from the axes input (opset 13 and later) or from
//! the attribute (opset 12 and earlier).

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
        None => match AttrReader::new(node).ints("axes")? {
            Some(axes) => args::usize_array(&axes),
            None => {
                return Err(EmitError::AttributeMissing {
                    node: node.name.clone(),
                    op: node.op_type.clone(),
                    attr: "axes".to_string(),
                });
            }
        },
    };

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(axes);
    call.push(resolver::pointer(y));
    ctx.kernel("unsqueeze", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
