//! OneHot. Depth is read from the depth tensor's first data element at emit
//! time; the element type comes from the values tensor.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let axis = AttrReader::new(node).int("axis", -1)?;
    let indices = ctx.input(node, 0, "indices")?;
    let depth = ctx.input(node, 1, "depth")?;
    let values = ctx.input(node, 2, "values")?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(values, node)?;

    let depth_value = depth
        .value
        .as_ref()
        .and_then(|v| v.data.scalar_i64())
        .ok_or_else(|| EmitError::UnsupportedMode {
            node: node.name.clone(),
            op: node.op_type.clone(),
            attr: "depth".to_string(),
            value: "runtime tensor".to_string(),
        })?;

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(indices));
    call.push(depth_value.to_string());
    call.push(resolver::pointer(values));
    call.push(axis.to_string());
    call.push(resolver::pointer(y));
    ctx.kernel("one_hot", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
