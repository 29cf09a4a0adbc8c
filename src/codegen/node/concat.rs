//! Concat. Axis 0 with inputs of ragged ranks takes a special-case kernel
//! that tolerates the mismatch and warns at runtime.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let axis = AttrReader::new(node).require_int("axis")?;
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
    let mut ranks_differ = false;
    for index in 0..node.inputs.len() {
        let input = ctx.input(node, index, "inputs")?;
        ranks_differ |= input.shape.len() != first.shape.len();
        pointers.push(resolver::pointer(input));
    }
    let list = args::brace_join(&pointers);
    ctx.scratch.put_args(pointers);

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(list);
    let kernel = if axis == 0 && ranks_differ {
        ctx.sink
            .line(format_args!("// ragged-rank concat on axis 0"));
        "concat_axis0_ragged"
    } else {
        call.push(axis.to_string());
        "concat"
    };
    call.push(resolver::pointer(y));
    ctx.kernel(kernel, &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
