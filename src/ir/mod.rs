//! Normalized emit-time intermediate representation.
//!
//! The external graph builder (parser, topological sort, shape inference,
//! constant lifting) produces these types; the emitter only reads them.

mod attribute;
mod element_type;
mod node;
mod tensor;

pub use attribute::{AttrKind, AttributeValue, Attributes};
pub use element_type::ElementType;
pub use node::ReadyNode;
pub use tensor::{Data, ReadyTensor, TensorCategory, TensorData, TensorMap};
