//! DynamicQuantizeLinear: f32 input, three outputs (u8 data, f32 scale,
//! u8 zero point).

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let x = ctx.input(node, 0, "x")?;
    let y = ctx.output(node, 0)?;
    let y_scale = ctx.output(node, 1)?;
    let y_zero_point = ctx.output(node, 2)?;
    let token = resolver::token(x, node)?;

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(resolver::pointer(y));
    call.push(resolver::pointer(y_scale));
    call.push(resolver::pointer(y_zero_point));
    ctx.kernel("dynamic_quantize_linear", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;

    use crate::codegen::error::EmitError;
    use crate::ir::{ElementType, ReadyNode};

    #[test]
    fn all_three_outputs_thread_through() {
        let map = map_of(vec![
            act("x", vec![8]),
            act_of("y", ElementType::Uint8, vec![8]),
            act("scale", vec![1]),
            act_of("zp", ElementType::Uint8, vec![1]),
        ]);
        let node = ReadyNode::new("DynamicQuantizeLinear", "q1")
            .input("x")
            .output("y")
            .output("scale")
            .output("zp");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            "tensor_math.dynamic_quantize_linear(f32, &tensor_x, &tensor_y, &tensor_scale, \
             &tensor_zp)?;\n"
        );
    }

    #[test]
    fn missing_third_output_is_fatal() {
        let map = map_of(vec![
            act("x", vec![8]),
            act_of("y", ElementType::Uint8, vec![8]),
            act("scale", vec![1]),
        ]);
        let node = ReadyNode::new("DynamicQuantizeLinear", "q2")
            .input("x")
            .output("y")
            .output("scale");
        let err = emit_one(&map, &node).unwrap_err();
        assert!(matches!(err, EmitError::TensorNotFound { .. }), "{err:?}");
    }
}
