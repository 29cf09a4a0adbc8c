//! The emit-time view of a graph node.

use super::attribute::{AttributeValue, Attributes};

/// A node ready for emission: operator type, resolved input/output tensor
/// names, and its attribute map.
///
/// Inputs are positional and optional; ONNX marks an omitted optional input
/// with an empty name, which the builder normalizes to `None`. Outputs are
/// always present. Every referenced name must resolve through the global
/// [`TensorMap`](super::TensorMap).
#[derive(Debug, Clone)]
pub struct ReadyNode {
    pub op_type: String,
    pub name: String,
    pub inputs: Vec<Option<String>>,
    pub outputs: Vec<String>,
    pub attrs: Attributes,
}

impl ReadyNode {
    pub fn new(op_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            op_type: op_type.into(),
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            attrs: Attributes::new(),
        }
    }

    pub fn input(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        // "" is the ONNX marker for an omitted optional input
        self.inputs.push((!name.is_empty()).then_some(name));
        self
    }

    /// Record an absent optional input slot.
    pub fn missing_input(mut self) -> Self {
        self.inputs.push(None);
        self
    }

    pub fn output(mut self, name: impl Into<String>) -> Self {
        self.outputs.push(name.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.attrs.insert(name.into(), value);
        self
    }

    pub fn attr_int(self, name: impl Into<String>, value: i64) -> Self {
        self.attr(name, AttributeValue::Int64(value))
    }

    pub fn attr_ints(self, name: impl Into<String>, values: Vec<i64>) -> Self {
        self.attr(name, AttributeValue::Int64s(values))
    }

    pub fn attr_float(self, name: impl Into<String>, value: f32) -> Self {
        self.attr(name, AttributeValue::Float32(value))
    }

    pub fn attr_string(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attr(name, AttributeValue::String(value.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_name_becomes_absent_slot() {
        let node = ReadyNode::new("Clip", "clip1")
            .input("x")
            .input("")
            .input("max");
        assert_eq!(node.inputs[0].as_deref(), Some("x"));
        assert_eq!(node.inputs[1], None);
        assert_eq!(node.inputs[2].as_deref(), Some("max"));
    }
}
