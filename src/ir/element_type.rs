//! Element types a tensor can carry at emit time.

/// Closed set of tensor element types.
///
/// `Undefined` is a legal placeholder on a [`ReadyTensor`](super::ReadyTensor)
/// as long as the tensor carries a payload whose variant pins the type down;
/// the resolver enforces that at least one of the two is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Float16,
    Float32,
    Float64,
    Int8,
    Uint8,
    Int16,
    Int32,
    Int64,
    Bool,
    String,
    Undefined,
}

impl ElementType {
    /// Map an ONNX `TensorProto.DataType` code (used by `Cast.to`).
    pub fn from_onnx_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(ElementType::Float32),
            2 => Some(ElementType::Uint8),
            3 => Some(ElementType::Int8),
            5 => Some(ElementType::Int16),
            6 => Some(ElementType::Int32),
            7 => Some(ElementType::Int64),
            8 => Some(ElementType::String),
            9 => Some(ElementType::Bool),
            10 => Some(ElementType::Float16),
            11 => Some(ElementType::Float64),
            _ => None,
        }
    }

    /// The type token spelled into generated kernel calls.
    ///
    /// `String` and `Undefined` have no generated-code representation.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            ElementType::Float16 => Some("f16"),
            ElementType::Float32 => Some("f32"),
            ElementType::Float64 => Some("f64"),
            ElementType::Int8 => Some("i8"),
            ElementType::Uint8 => Some("u8"),
            ElementType::Int16 => Some("i16"),
            ElementType::Int32 => Some("i32"),
            ElementType::Int64 => Some("i64"),
            ElementType::Bool => Some("bool"),
            ElementType::String | ElementType::Undefined => None,
        }
    }

    /// Payload width of one element in bytes.
    pub fn byte_width(&self) -> Option<usize> {
        match self {
            ElementType::Int8 | ElementType::Uint8 | ElementType::Bool => Some(1),
            ElementType::Float16 | ElementType::Int16 => Some(2),
            ElementType::Float32 | ElementType::Int32 => Some(4),
            ElementType::Float64 | ElementType::Int64 => Some(8),
            ElementType::String | ElementType::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, ElementType::Undefined)
    }
}
