//! ONNX node attributes, converted from the protobuf by the graph loader.

use core::fmt;
use std::collections::HashMap;

use super::tensor::TensorData;

/// Attribute map of a node, keyed by attribute name.
pub type Attributes = HashMap<String, AttributeValue>;

/// A typed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Float32(f32),
    Float32s(Vec<f32>),
    Int64(i64),
    Int64s(Vec<i64>),
    String(String),
    Strings(Vec<String>),
    Tensor(TensorData),
    SparseTensor(TensorData),
}

impl AttributeValue {
    pub fn kind(&self) -> AttrKind {
        match self {
            AttributeValue::Float32(_) => AttrKind::Float,
            AttributeValue::Float32s(_) => AttrKind::Floats,
            AttributeValue::Int64(_) => AttrKind::Int,
            AttributeValue::Int64s(_) => AttrKind::Ints,
            AttributeValue::String(_) => AttrKind::String,
            AttributeValue::Strings(_) => AttrKind::Strings,
            AttributeValue::Tensor(_) => AttrKind::Tensor,
            AttributeValue::SparseTensor(_) => AttrKind::SparseTensor,
        }
    }
}

/// Attribute-type tags, mirroring `AttributeProto.AttributeType`. Used in
/// expected-vs-actual diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    Int,
    Float,
    String,
    Ints,
    Floats,
    Tensor,
    SparseTensor,
    Strings,
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttrKind::Int => "INT",
            AttrKind::Float => "FLOAT",
            AttrKind::String => "STRING",
            AttrKind::Ints => "INTS",
            AttrKind::Floats => "FLOATS",
            AttrKind::Tensor => "TENSOR",
            AttrKind::SparseTensor => "SPARSE_TENSOR",
            AttrKind::Strings => "STRINGS",
        };
        f.write_str(name)
    }
}
