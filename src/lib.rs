//! Ahead-of-time kernel-call emitter for ONNX graphs.
//!
//! Given a normalized per-node view of a trained network (resolved tensor
//! identities, shapes, element types, and category tags), this crate emits
//! standalone source text implementing the model's forward pass. The
//! generated code references a closed external surface only:
//! `tensor_math.<kernel>` invocations, `param_lib.tensor_<name>` weights, an
//! `allocator` scratch handle, and an optional `log_function` hook. There is
//! no ONNX parser, no dynamic graph walker, and no heap traffic in the
//! generated code beyond the allocator handle it is given.
//!
//! Parsing, topological sorting, shape inference, constant lifting, weight
//! serialization, and the tensor math runtime itself are external
//! collaborators.
//!
//! ```
//! use onnx_aot::{
//!     EmitterConfig, ElementType, ReadyNode, ReadyTensor, TensorCategory, TensorMap,
//!     emit_graph,
//! };
//!
//! let map: TensorMap = [
//!     ReadyTensor::new("x", TensorCategory::Input, ElementType::Float32, vec![1, 4]),
//!     ReadyTensor::new("y", TensorCategory::Output, ElementType::Float32, vec![1, 4]),
//! ]
//! .into_iter()
//! .collect();
//! let nodes = vec![ReadyNode::new("Relu", "relu1").input("x").output("y")];
//!
//! let code = emit_graph(&map, &nodes, "y", EmitterConfig::new()).unwrap();
//! assert!(code.contains("tensor_math.relu(f32, &tensor_x, &tensor_y)?;"));
//! ```

pub mod codegen;
pub mod ir;

pub use codegen::error::EmitError;
pub use codegen::{EmissionContext, EmitterConfig, Operator, emit_graph, emit_node};
pub use ir::{
    AttrKind, AttributeValue, Attributes, Data, ElementType, ReadyNode, ReadyTensor,
    TensorCategory, TensorData, TensorMap,
};
