//! Helpers shared by the emitter unit tests.

use crate::codegen::{EmissionContext, EmitterConfig, emit_node, error::EmitError};
use crate::ir::{ElementType, ReadyNode, ReadyTensor, TensorCategory, TensorMap};

pub(crate) fn act(name: &str, shape: Vec<usize>) -> ReadyTensor {
    ReadyTensor::new(name, TensorCategory::Activation, ElementType::Float32, shape)
}

pub(crate) fn act_of(name: &str, dtype: ElementType, shape: Vec<usize>) -> ReadyTensor {
    ReadyTensor::new(name, TensorCategory::Activation, dtype, shape)
}

pub(crate) fn init(name: &str, shape: Vec<usize>) -> ReadyTensor {
    ReadyTensor::new(name, TensorCategory::Initializer, ElementType::Float32, shape)
}

pub(crate) fn init_of(name: &str, dtype: ElementType, shape: Vec<usize>) -> ReadyTensor {
    ReadyTensor::new(name, TensorCategory::Initializer, dtype, shape)
}

pub(crate) fn map_of(tensors: Vec<ReadyTensor>) -> TensorMap {
    tensors.into_iter().collect()
}

/// Emit one node with all knobs off and return the generated text.
pub(crate) fn emit_one(map: &TensorMap, node: &ReadyNode) -> Result<String, EmitError> {
    emit_one_with(map, node, EmitterConfig::default())
}

pub(crate) fn emit_one_with(
    map: &TensorMap,
    node: &ReadyNode,
    config: EmitterConfig,
) -> Result<String, EmitError> {
    let mut ctx = EmissionContext::new(map, "", config);
    emit_node(&mut ctx, node)?;
    Ok(ctx.finish())
}
