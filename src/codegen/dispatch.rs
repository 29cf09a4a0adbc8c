//! Operator registry and node dispatch.
//!
//! The supported operator set is a closed tagged variant; adding an operator
//! means extending the variant and registering its emitter in `dispatch`.
//! There is no string comparison chain in the hot path: `op_type` parses
//! once into the variant.

use strum_macros::{Display, EnumIter, EnumString};

use crate::ir::{ReadyNode, TensorMap};

use super::node::unary::UnaryKind;
use super::{EmissionContext, EmitterConfig, error::EmitError, frame, node};

/// Whether an emitter left a kernel invocation open, awaiting the common
/// fallible suffix. Constant, the LogSoftmax stub, and the unreachable stub
/// emit complete statements of their own and skip the suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KernelCall {
    Fallible,
    None,
}

/// The closed set of supported ONNX operators. Variant names match the ONNX
/// op set, so `op_type.parse()` is the registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Operator {
    Add,
    AveragePool,
    BatchNormalization,
    Cast,
    Ceil,
    Clip,
    Concat,
    Constant,
    Conv,
    ConvInteger,
    Div,
    DynamicQuantizeLinear,
    Elu,
    Flatten,
    Floor,
    Gather,
    Gelu,
    Gemm,
    Identity,
    LeakyRelu,
    LogSoftmax,
    MatMul,
    MaxPool,
    Mean,
    Mul,
    Neg,
    OneHot,
    Pad,
    ReduceMean,
    Relu,
    Reshape,
    Resize,
    Shape,
    Sigmoid,
    Slice,
    Softmax,
    Split,
    Sqrt,
    Squeeze,
    Sub,
    Sum,
    Tanh,
    Transpose,
    Unsqueeze,
}

impl Operator {
    /// Whether an `op_type` string names a supported operator.
    pub fn is_supported(op_type: &str) -> bool {
        op_type.parse::<Operator>().is_ok()
    }

    fn dispatch(
        self,
        ctx: &mut EmissionContext<'_>,
        node: &ReadyNode,
    ) -> Result<KernelCall, EmitError> {
        match self {
            Operator::Add => node::binary::emit(ctx, node, "add"),
            Operator::Sub => node::binary::emit(ctx, node, "sub"),
            Operator::Mul => node::binary::emit(ctx, node, "mul"),
            Operator::Div => node::binary::emit(ctx, node, "div"),
            Operator::Sum => node::variadic::emit(ctx, node, "sum"),
            Operator::Mean => node::variadic::emit(ctx, node, "mean"),
            Operator::MatMul => node::matmul::emit(ctx, node),
            Operator::Gemm => node::gemm::emit(ctx, node),
            Operator::Conv => node::conv::emit(ctx, node),
            Operator::ConvInteger => node::conv_integer::emit(ctx, node),
            Operator::MaxPool => node::pool::emit_max(ctx, node),
            Operator::AveragePool => node::pool::emit_avg(ctx, node),
            Operator::BatchNormalization => node::batch_norm::emit(ctx, node),
            Operator::Concat => node::concat::emit(ctx, node),
            Operator::Split => node::split::emit(ctx, node),
            Operator::Gather => node::gather::emit(ctx, node),
            Operator::Reshape => node::reshape::emit(ctx, node),
            Operator::Resize => node::resize::emit(ctx, node),
            Operator::Pad => node::pad::emit(ctx, node),
            Operator::Clip => node::clip::emit(ctx, node),
            Operator::ReduceMean => node::reduce_mean::emit(ctx, node),
            Operator::Slice => node::slice::emit(ctx, node),
            Operator::Constant => node::constant::emit(ctx, node),
            Operator::Shape => node::shape::emit(ctx, node),
            Operator::Transpose => node::transpose::emit(ctx, node),
            Operator::Unsqueeze => node::unsqueeze::emit(ctx, node),
            Operator::Squeeze => node::squeeze::emit(ctx, node),
            Operator::Flatten => node::flatten::emit(ctx, node),
            Operator::OneHot => node::one_hot::emit(ctx, node),
            Operator::Cast => node::cast::emit(ctx, node),
            Operator::DynamicQuantizeLinear => node::dynamic_quantize_linear::emit(ctx, node),
            Operator::Relu => node::unary::emit(ctx, node, UnaryKind::Relu),
            Operator::Sigmoid => node::unary::emit(ctx, node, UnaryKind::Sigmoid),
            Operator::Tanh => node::unary::emit(ctx, node, UnaryKind::Tanh),
            Operator::Floor => node::unary::emit(ctx, node, UnaryKind::Floor),
            Operator::Ceil => node::unary::emit(ctx, node, UnaryKind::Ceil),
            Operator::Sqrt => node::unary::emit(ctx, node, UnaryKind::Sqrt),
            Operator::Neg => node::unary::emit(ctx, node, UnaryKind::Neg),
            Operator::Identity => node::unary::emit(ctx, node, UnaryKind::Identity),
            Operator::Softmax => node::unary::emit(ctx, node, UnaryKind::Softmax),
            Operator::LogSoftmax => node::unary::emit(ctx, node, UnaryKind::LogSoftmax),
            Operator::LeakyRelu => node::unary::emit(ctx, node, UnaryKind::LeakyRelu),
            Operator::Elu => node::unary::emit(ctx, node, UnaryKind::Elu),
            Operator::Gelu => node::unary::emit(ctx, node, UnaryKind::Gelu),
        }
    }
}

/// Emit one node: preamble, registry lookup, emitter (or unreachable stub),
/// conditional fallible suffix.
pub fn emit_node(ctx: &mut EmissionContext<'_>, node: &ReadyNode) -> Result<(), EmitError> {
    log::debug!("emitting node `{}` ({})", node.name, node.op_type);
    frame::preamble(ctx, node)?;

    let Ok(op) = node.op_type.parse::<Operator>() else {
        frame::unreachable_stub(ctx, node);
        return Ok(());
    };

    match op.dispatch(ctx, node)? {
        KernelCall::Fallible => ctx.sink.close_fallible(),
        KernelCall::None => {}
    }
    Ok(())
}

/// Emit the whole graph in node-visit order and return the generated source
/// text. On error the partial output is dropped with the context.
pub fn emit_graph(
    tensors: &TensorMap,
    nodes: &[ReadyNode],
    network_output: &str,
    config: EmitterConfig,
) -> Result<String, EmitError> {
    let mut ctx = EmissionContext::new(tensors, network_output, config);
    ctx.sink.line(format_args!("// @generated by onnx-aot"));
    for node in nodes {
        emit_node(&mut ctx, node)?;
    }
    Ok(ctx.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_type_strings_parse_into_the_registry() {
        assert_eq!("Conv".parse::<Operator>(), Ok(Operator::Conv));
        assert_eq!("MatMul".parse::<Operator>(), Ok(Operator::MatMul));
        assert_eq!(
            "DynamicQuantizeLinear".parse::<Operator>(),
            Ok(Operator::DynamicQuantizeLinear)
        );
        assert!("HypotheticalOp".parse::<Operator>().is_err());
        assert!(Operator::is_supported("BatchNormalization"));
        assert!(!Operator::is_supported("Loop"));
    }
}
