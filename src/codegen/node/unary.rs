//! Unary elementwise operators and softmax variants, routed through a
//! single emitter with a kind tag.

use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnaryKind {
    Relu,
    Sigmoid,
    Tanh,
    Floor,
    Ceil,
    Sqrt,
    Neg,
    Identity,
    Softmax,
    LogSoftmax,
    LeakyRelu,
    Elu,
    Gelu,
}

impl UnaryKind {
    fn kernel(&self) -> &'static str {
        match self {
            UnaryKind::Relu => "relu",
            UnaryKind::Sigmoid => "sigmoid",
            UnaryKind::Tanh => "tanh",
            UnaryKind::Floor => "floor",
            UnaryKind::Ceil => "ceil",
            UnaryKind::Sqrt => "sqrt",
            UnaryKind::Neg => "neg",
            UnaryKind::Identity => "identity",
            UnaryKind::Softmax => "softmax",
            UnaryKind::LogSoftmax => "log_softmax",
            UnaryKind::LeakyRelu => "leaky_relu",
            UnaryKind::Elu => "elu",
            UnaryKind::Gelu => "gelu",
        }
    }
}

const GELU_APPROXIMATIONS: [&str; 2] = ["none", "tanh"];

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
    kind: UnaryKind,
) -> Result<KernelCall, EmitError> {
    if kind == UnaryKind::LogSoftmax {
        // TODO implement once the runtime grows a log_softmax kernel
        log::warn!("LogSoftmax on node `{}` has no kernel yet", node.name);
        ctx.sink.line(format_args!(
            "// LogSoftmax not implemented; node {} skipped",
            node.name
        ));
        return Ok(KernelCall::None);
    }

    let x = ctx.input(node, 0, "X")?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(x, node)?;
    let reader = AttrReader::new(node);

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    match kind {
        UnaryKind::LeakyRelu => call.push(args::f32_lit(reader.float("alpha", 0.01)?)),
        UnaryKind::Elu => call.push(args::f32_lit(reader.float("alpha", 1.0)?)),
        UnaryKind::Gelu => {
            let approximate = reader.string("approximate", "none")?;
            if !GELU_APPROXIMATIONS.contains(&approximate.as_str()) {
                return Err(EmitError::UnsupportedMode {
                    node: node.name.clone(),
                    op: node.op_type.clone(),
                    attr: "approximate".to_string(),
                    value: approximate,
                });
            }
            call.push(args::str_lit(&approximate));
        }
        _ => {}
    }
    call.push(resolver::pointer(y));
    ctx.kernel(kind.kernel(), &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use rstest::rstest;

    use crate::ir::ReadyNode;

    #[rstest]
    #[case("Relu", "relu")]
    #[case("Sigmoid", "sigmoid")]
    #[case("Tanh", "tanh")]
    #[case("Floor", "floor")]
    #[case("Ceil", "ceil")]
    #[case("Sqrt", "sqrt")]
    #[case("Neg", "neg")]
    #[case("Identity", "identity")]
    #[case("Softmax", "softmax")]
    fn plain_unaries_emit_in_out_calls(#[case] op: &str, #[case] kernel: &str) {
        let map = map_of(vec![act("x", vec![4]), act("y", vec![4])]);
        let node = ReadyNode::new(op, "n1").input("x").output("y");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            format!("tensor_math.{kernel}(f32, &tensor_x, &tensor_y)?;\n")
        );
    }

    #[rstest]
    #[case("LeakyRelu", "leaky_relu", "0.01")]
    #[case("Elu", "elu", "1.0")]
    fn alpha_defaults_match_the_onnx_operator_set(
        #[case] op: &str,
        #[case] kernel: &str,
        #[case] alpha: &str,
    ) {
        let map = map_of(vec![act("x", vec![4]), act("y", vec![4])]);
        let node = ReadyNode::new(op, "n1").input("x").output("y");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            format!("tensor_math.{kernel}(f32, &tensor_x, {alpha}, &tensor_y)?;\n")
        );
    }

    #[test]
    fn gelu_validates_the_approximate_mode() {
        let map = map_of(vec![act("x", vec![4]), act("y", vec![4])]);
        let node = ReadyNode::new("Gelu", "g1")
            .input("x")
            .attr_string("approximate", "tanh")
            .output("y");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            "tensor_math.gelu(f32, &tensor_x, \"tanh\", &tensor_y)?;\n"
        );

        let bad = ReadyNode::new("Gelu", "g2")
            .input("x")
            .attr_string("approximate", "sigmoid")
            .output("y");
        assert!(emit_one(&map, &bad).is_err());
    }

    #[test]
    fn log_softmax_is_a_comment_stub() {
        let map = map_of(vec![act("x", vec![4]), act("y", vec![4])]);
        let node = ReadyNode::new("LogSoftmax", "ls1").input("x").output("y");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(code, "// LogSoftmax not implemented; node ls1 skipped\n");
        assert!(!code.contains("tensor_math."));
    }
}
