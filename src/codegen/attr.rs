//! Typed attribute reader.
//!
//! Emitters declare what they read as (name, expected kind, default); the
//! reader enforces the kind and supplies the default. Unknown attributes on
//! a node are ignored for ONNX forward compatibility.

use crate::ir::{AttrKind, AttributeValue, ReadyNode, TensorData};

use super::error::EmitError;

pub(crate) struct AttrReader<'a> {
    node: &'a ReadyNode,
}

impl<'a> AttrReader<'a> {
    pub(crate) fn new(node: &'a ReadyNode) -> Self {
        Self { node }
    }

    fn get(&self, name: &str) -> Option<&'a AttributeValue> {
        self.node.attrs.get(name)
    }

    fn mismatch(&self, name: &str, expected: AttrKind, actual: AttrKind) -> EmitError {
        EmitError::AttributeTypeMismatch {
            node: self.node.name.clone(),
            op: self.node.op_type.clone(),
            attr: name.to_string(),
            expected,
            actual,
        }
    }

    fn missing(&self, name: &str) -> EmitError {
        EmitError::AttributeMissing {
            node: self.node.name.clone(),
            op: self.node.op_type.clone(),
            attr: name.to_string(),
        }
    }

    pub(crate) fn int(&self, name: &str, default: i64) -> Result<i64, EmitError> {
        self.int_opt(name).map(|v| v.unwrap_or(default))
    }

    pub(crate) fn int_opt(&self, name: &str) -> Result<Option<i64>, EmitError> {
        match self.get(name) {
            Some(AttributeValue::Int64(v)) => Ok(Some(*v)),
            Some(other) => Err(self.mismatch(name, AttrKind::Int, other.kind())),
            None => Ok(None),
        }
    }

    pub(crate) fn require_int(&self, name: &str) -> Result<i64, EmitError> {
        self.int_opt(name)?.ok_or_else(|| self.missing(name))
    }

    pub(crate) fn float(&self, name: &str, default: f32) -> Result<f32, EmitError> {
        match self.get(name) {
            Some(AttributeValue::Float32(v)) => Ok(*v),
            Some(other) => Err(self.mismatch(name, AttrKind::Float, other.kind())),
            None => Ok(default),
        }
    }

    pub(crate) fn string(&self, name: &str, default: &str) -> Result<String, EmitError> {
        self.string_opt(name)
            .map(|v| v.unwrap_or_else(|| default.to_string()))
    }

    pub(crate) fn string_opt(&self, name: &str) -> Result<Option<String>, EmitError> {
        match self.get(name) {
            Some(AttributeValue::String(v)) => Ok(Some(v.clone())),
            Some(other) => Err(self.mismatch(name, AttrKind::String, other.kind())),
            None => Ok(None),
        }
    }

    pub(crate) fn ints(&self, name: &str) -> Result<Option<Vec<i64>>, EmitError> {
        match self.get(name) {
            Some(AttributeValue::Int64s(v)) => Ok(Some(v.clone())),
            Some(other) => Err(self.mismatch(name, AttrKind::Ints, other.kind())),
            None => Ok(None),
        }
    }

    pub(crate) fn require_ints(&self, name: &str) -> Result<Vec<i64>, EmitError> {
        self.ints(name)?.ok_or_else(|| self.missing(name))
    }

    pub(crate) fn floats(&self, name: &str) -> Result<Option<Vec<f32>>, EmitError> {
        match self.get(name) {
            Some(AttributeValue::Float32s(v)) => Ok(Some(v.clone())),
            Some(other) => Err(self.mismatch(name, AttrKind::Floats, other.kind())),
            None => Ok(None),
        }
    }

    pub(crate) fn float_opt(&self, name: &str) -> Result<Option<f32>, EmitError> {
        match self.get(name) {
            Some(AttributeValue::Float32(v)) => Ok(Some(*v)),
            Some(other) => Err(self.mismatch(name, AttrKind::Float, other.kind())),
            None => Ok(None),
        }
    }

    pub(crate) fn tensor(&self, name: &str) -> Result<Option<&'a TensorData>, EmitError> {
        match self.get(name) {
            Some(AttributeValue::Tensor(v)) => Ok(Some(v)),
            Some(other) => Err(self.mismatch(name, AttrKind::Tensor, other.kind())),
            None => Ok(None),
        }
    }

    pub(crate) fn sparse_tensor(&self, name: &str) -> Result<Option<&'a TensorData>, EmitError> {
        match self.get(name) {
            Some(AttributeValue::SparseTensor(v)) => Ok(Some(v)),
            Some(other) => Err(self.mismatch(name, AttrKind::SparseTensor, other.kind())),
            None => Ok(None),
        }
    }

    pub(crate) fn strings(&self, name: &str) -> Result<Option<Vec<String>>, EmitError> {
        match self.get(name) {
            Some(AttributeValue::Strings(v)) => Ok(Some(v.clone())),
            Some(other) => Err(self.mismatch(name, AttrKind::Strings, other.kind())),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::AttributeValue;

    #[test]
    fn defaults_apply_when_attribute_absent() {
        let node = ReadyNode::new("Gemm", "gemm1");
        let reader = AttrReader::new(&node);
        assert_eq!(reader.float("alpha", 1.0).unwrap(), 1.0);
        assert_eq!(reader.int("transA", 0).unwrap(), 0);
        assert_eq!(reader.string("auto_pad", "NOTSET").unwrap(), "NOTSET");
    }

    #[test]
    fn wrong_kind_is_a_type_mismatch() {
        let node = ReadyNode::new("Concat", "concat1")
            .attr("axis", AttributeValue::Float32(1.0));
        let reader = AttrReader::new(&node);
        let err = reader.require_int("axis").unwrap_err();
        assert_eq!(
            err,
            EmitError::AttributeTypeMismatch {
                node: "concat1".to_string(),
                op: "Concat".to_string(),
                attr: "axis".to_string(),
                expected: AttrKind::Int,
                actual: AttrKind::Float,
            }
        );
    }

    #[test]
    fn missing_required_attribute_is_reported() {
        let node = ReadyNode::new("MaxPool", "pool1").attr_ints("kernel_shape", vec![2, 2]);
        let reader = AttrReader::new(&node);
        let err = reader.require_ints("strides").unwrap_err();
        assert_eq!(
            err,
            EmitError::AttributeMissing {
                node: "pool1".to_string(),
                op: "MaxPool".to_string(),
                attr: "strides".to_string(),
            }
        );
    }
}
