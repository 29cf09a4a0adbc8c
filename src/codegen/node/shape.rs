//! Shape: rank-1 int64 view of a tensor's dimensions, with optional
//! start/end clamping.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let reader = AttrReader::new(node);
    let start = reader.int_opt("start")?;
    let end = reader.int_opt("end")?;

    let x = ctx.input(node, 0, "data")?;
    let y = ctx.output(node, 0)?;

    let mut call = ctx.scratch.take_args();
    call.push("i64".to_string());
    call.push(resolver::pointer(x));
    call.push(start.map_or_else(|| "null".to_string(), |v| v.to_string()));
    call.push(end.map_or_else(|| "null".to_string(), |v| v.to_string()));
    call.push(resolver::pointer(y));
    ctx.kernel("shape", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;

    use crate::ir::{ElementType, ReadyNode};

    #[test]
    fn absent_bounds_render_as_null() {
        let map = map_of(vec![
            act("x", vec![2, 3, 4]),
            act_of("y", ElementType::Int64, vec![3]),
        ]);
        let node = ReadyNode::new("Shape", "sh1").input("x").output("y");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            "tensor_math.shape(i64, &tensor_x, null, null, &tensor_y)?;\n"
        );
    }

    #[test]
    fn start_and_end_pass_as_scalars() {
        let map = map_of(vec![
            act("x", vec![2, 3, 4]),
            act_of("y", ElementType::Int64, vec![2]),
        ]);
        let node = ReadyNode::new("Shape", "sh2")
            .input("x")
            .attr_int("start", 1)
            .attr_int("end", -1)
            .output("y");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            "tensor_math.shape(i64, &tensor_x, 1, -1, &tensor_y)?;\n"
        );
    }
}
