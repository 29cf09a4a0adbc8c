//! Binary elementwise operators: Add, Sub, Mul, Div. Typed as T×T→T with
//! ONNX broadcasting handled by the kernel.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
    kernel: &'static str,
) -> Result<KernelCall, EmitError> {
    let a = ctx.input(node, 0, "A")?;
    let b = ctx.input(node, 1, "B")?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(a, node)?;

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(a));
    call.push(resolver::pointer(b));
    call.push(resolver::pointer(y));
    ctx.kernel(kernel, &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use rstest::rstest;

    use crate::ir::ReadyNode;

    #[rstest]
    #[case("Add", "add")]
    #[case("Sub", "sub")]
    #[case("Mul", "mul")]
    #[case("Div", "div")]
    fn binary_ops_emit_typed_kernel_calls(#[case] op: &str, #[case] kernel: &str) {
        let map = map_of(vec![
            act("a", vec![2, 2]),
            act("b", vec![2, 2]),
            act("c", vec![2, 2]),
        ]);
        let node = ReadyNode::new(op, "n1").input("a").input("b").output("c");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            format!("tensor_math.{kernel}(f32, &tensor_a, &tensor_b, &tensor_c)?;\n")
        );
    }

    #[test]
    fn initializer_operand_is_addressed_through_param_lib() {
        let map = map_of(vec![
            act("a", vec![2]),
            init("w", vec![2]),
            act("c", vec![2]),
        ]);
        let node = ReadyNode::new("Mul", "n1").input("a").input("w").output("c");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            "tensor_math.mul(f32, &tensor_a, @const_ref(param_lib.tensor_w), &tensor_c)?;\n"
        );
    }
}
