//! Cast. The source type resolves through the tensor map; the target type
//! comes from the `to` attribute's ONNX data-type code.

use super::prelude::*;
use crate::ir::ElementType;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let to = AttrReader::new(node).require_int("to")?;
    let target = ElementType::from_onnx_code(to)
        .and_then(|elem| elem.token())
        .ok_or_else(|| EmitError::UnsupportedMode {
            node: node.name.clone(),
            op: node.op_type.clone(),
            attr: "to".to_string(),
            value: to.to_string(),
        })?;

    let x = ctx.input(node, 0, "input")?;
    let y = ctx.output(node, 0)?;
    let source = resolver::token(x, node)?;

    let mut call = ctx.scratch.take_args();
    call.push(source.to_string());
    call.push(target.to_string());
    call.push(resolver::pointer(x));
    call.push(resolver::pointer(y));
    ctx.kernel("cast", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
