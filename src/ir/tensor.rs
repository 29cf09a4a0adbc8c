//! Tensor payloads and the emit-time view of a graph tensor.

use std::collections::{HashMap, HashSet};

use derive_new::new;
use half::f16;

use super::element_type::ElementType;

/// Typed payload of a tensor whose contents are known at emit time.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    Float16s(Vec<f16>),
    Float32s(Vec<f32>),
    Float64s(Vec<f64>),
    Int8s(Vec<i8>),
    Uint8s(Vec<u8>),
    Int16s(Vec<i16>),
    Int32s(Vec<i32>),
    Int64s(Vec<i64>),
    Bools(Vec<bool>),
    Strings(Vec<String>),
}

impl Data {
    pub fn elem_type(&self) -> ElementType {
        match self {
            Data::Float16s(_) => ElementType::Float16,
            Data::Float32s(_) => ElementType::Float32,
            Data::Float64s(_) => ElementType::Float64,
            Data::Int8s(_) => ElementType::Int8,
            Data::Uint8s(_) => ElementType::Uint8,
            Data::Int16s(_) => ElementType::Int16,
            Data::Int32s(_) => ElementType::Int32,
            Data::Int64s(_) => ElementType::Int64,
            Data::Bools(_) => ElementType::Bool,
            Data::Strings(_) => ElementType::String,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Data::Float16s(v) => v.len(),
            Data::Float32s(v) => v.len(),
            Data::Float64s(v) => v.len(),
            Data::Int8s(v) => v.len(),
            Data::Uint8s(v) => v.len(),
            Data::Int16s(v) => v.len(),
            Data::Int32s(v) => v.len(),
            Data::Int64s(v) => v.len(),
            Data::Bools(v) => v.len(),
            Data::Strings(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Integer view of the payload. `None` for float, bool, and string data.
    pub fn to_i64s(&self) -> Option<Vec<i64>> {
        match self {
            Data::Int8s(v) => Some(v.iter().map(|&x| x as i64).collect()),
            Data::Uint8s(v) => Some(v.iter().map(|&x| x as i64).collect()),
            Data::Int16s(v) => Some(v.iter().map(|&x| x as i64).collect()),
            Data::Int32s(v) => Some(v.iter().map(|&x| x as i64).collect()),
            Data::Int64s(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// First payload element as an integer scalar (numeric variants only).
    pub fn scalar_i64(&self) -> Option<i64> {
        match self {
            Data::Float16s(v) => v.first().map(|&x| f32::from(x) as i64),
            Data::Float32s(v) => v.first().map(|&x| x as i64),
            Data::Float64s(v) => v.first().map(|&x| x as i64),
            Data::Int8s(v) => v.first().map(|&x| x as i64),
            Data::Uint8s(v) => v.first().map(|&x| x as i64),
            Data::Int16s(v) => v.first().map(|&x| x as i64),
            Data::Int32s(v) => v.first().map(|&x| x as i64),
            Data::Int64s(v) => v.first().copied(),
            Data::Bools(_) | Data::Strings(_) => None,
        }
    }
}

/// Payload plus its static shape.
#[derive(Debug, Clone, PartialEq, new)]
pub struct TensorData {
    pub shape: Vec<usize>,
    pub data: Data,
}

impl TensorData {
    pub fn elem_type(&self) -> ElementType {
        self.data.elem_type()
    }
}

/// Where a tensor lives in the generated program; determines addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorCategory {
    /// Static weight or constant, addressed through the parameter library.
    Initializer,
    /// Graph input, a local in the generated predict function.
    Input,
    /// Intermediate value, a local in the generated predict function.
    Activation,
    /// Graph output, a local in the generated predict function.
    Output,
}

/// The normalized view of an ONNX tensor at emit time.
///
/// Created by the external graph builder before emission and never mutated
/// while the emitter runs.
#[derive(Debug, Clone)]
pub struct ReadyTensor {
    pub name: String,
    pub category: TensorCategory,
    pub dtype: ElementType,
    pub shape: Vec<usize>,
    /// Handle to the original TensorProto payload, when one exists. Carries
    /// the authoritative element type whenever `dtype` is `Undefined`.
    pub value: Option<TensorData>,
    ident: String,
}

impl ReadyTensor {
    pub fn new(
        name: impl Into<String>,
        category: TensorCategory,
        dtype: ElementType,
        shape: Vec<usize>,
    ) -> Self {
        let name = name.into();
        let ident = sanitize(&name);
        Self {
            name,
            category,
            dtype,
            shape,
            value: None,
            ident,
        }
    }

    pub fn with_value(mut self, value: TensorData) -> Self {
        self.value = Some(value);
        self
    }

    /// The sanitized, graph-unique identifier used in generated code.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn is_initializer(&self) -> bool {
        matches!(self.category, TensorCategory::Initializer)
    }
}

/// Identifier-legal transform of an ONNX tensor name. Deterministic; made
/// collision-free per graph by [`TensorMap::insert`].
pub(crate) fn sanitize(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Global mapping from tensor name to [`ReadyTensor`]. Lookup through this
/// map is the only legal way to resolve a tensor handle referenced by a node.
#[derive(Debug, Default)]
pub struct TensorMap {
    tensors: HashMap<String, ReadyTensor>,
    idents: HashSet<String>,
}

impl TensorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tensor, rewriting its sanitized identifier with a numeric
    /// suffix when a previously inserted tensor already claimed it.
    pub fn insert(&mut self, mut tensor: ReadyTensor) {
        if !self.idents.insert(tensor.ident.clone()) {
            let mut n = 1;
            loop {
                let candidate = format!("{}_{n}", tensor.ident);
                if self.idents.insert(candidate.clone()) {
                    tensor.ident = candidate;
                    break;
                }
                n += 1;
            }
        }
        self.tensors.insert(tensor.name.clone(), tensor);
    }

    pub fn get(&self, name: &str) -> Option<&ReadyTensor> {
        self.tensors.get(name)
    }

    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }
}

impl FromIterator<ReadyTensor> for TensorMap {
    fn from_iter<I: IntoIterator<Item = ReadyTensor>>(iter: I) -> Self {
        let mut map = TensorMap::new();
        for tensor in iter {
            map.insert(tensor);
        }
        map
    }
}
