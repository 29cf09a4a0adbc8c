//! Transpose. The permutation defaults to reversed axes; the kernel takes
//! the allocator handle to reorder strides.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let x = ctx.input(node, 0, "data")?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(x, node)?;
    let perm = AttrReader::new(node)
        .ints("perm")?
        .unwrap_or_else(|| (0..x.shape.len() as i64).rev().collect());

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push("allocator".to_string());
    call.push(resolver::pointer(x));
    call.push(args::usize_array(&perm));
    call.push(resolver::pointer(y));
    ctx.kernel("transpose", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;

    use crate::ir::ReadyNode;

    #[test]
    fn default_permutation_reverses_the_axes() {
        let map = map_of(vec![act("x", vec![2, 3, 4]), act("y", vec![4, 3, 2])]);
        let node = ReadyNode::new("Transpose", "t1").input("x").output("y");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            "tensor_math.transpose(f32, allocator, &tensor_x, {2, 1, 0}, &tensor_y)?;\n"
        );
    }

    #[test]
    fn explicit_permutation_passes_through() {
        let map = map_of(vec![act("x", vec![2, 3, 4]), act("y", vec![2, 4, 3])]);
        let node = ReadyNode::new("Transpose", "t2")
            .input("x")
            .attr_ints("perm", vec![0, 2, 1])
            .output("y");
        let code = emit_one(&map, &node).unwrap();
        assert!(code.contains("{0, 2, 1}"), "{code}");
    }
}
