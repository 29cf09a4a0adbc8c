//! Variadic elementwise operators: Sum and Mean over an input list.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
    kernel: &'static str,
) -> Result<KernelCall, EmitError> {
    if node.inputs.is_empty() {
        return Err(EmitError::EmptyInputList {
            node: node.name.clone(),
            op: node.op_type.clone(),
        });
    }
    let first = ctx.input(node, 0, "inputs")?;
    let token = resolver::token(first, node)?;
    let y = ctx.output(node, 0)?;

    let mut pointers = ctx.scratch.take_args();
    for index in 0..node.inputs.len() {
        let input = ctx.input(node, index, "inputs")?;
        pointers.push(resolver::pointer(input));
    }
    let list = args::brace_join(&pointers);
    ctx.scratch.put_args(pointers);

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(list);
    call.push(resolver::pointer(y));
    ctx.kernel(kernel, &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
