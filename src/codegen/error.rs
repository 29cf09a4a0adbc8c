//! Emission-time diagnostics.

use thiserror::Error;

use crate::ir::AttrKind;

/// The closed taxonomy of emitter errors. Every variant names the offending
/// node; tensor names and expected-vs-actual details are carried where they
/// apply.
///
/// There is no local recovery: an emitter either produces a well-formed call
/// site or raises one of these, and the caller discards the partially
/// written sink. Unknown operators are the single soft failure and do not
/// surface here (they emit an unreachable stub instead).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmitError {
    #[error("node `{node}` references tensor `{tensor}` which is not in the tensor map")]
    TensorNotFound { node: String, tensor: String },

    #[error("cannot determine the element type of tensor `{tensor}` used by node `{node}`")]
    MissingTypeInformation { node: String, tensor: String },

    #[error(
        "{op}: attribute `{attr}` on node `{node}` expected {expected} but found {actual}"
    )]
    AttributeTypeMismatch {
        node: String,
        op: String,
        attr: String,
        expected: AttrKind,
        actual: AttrKind,
    },

    #[error("{op}: required attribute `{attr}` is missing on node `{node}`")]
    AttributeMissing {
        node: String,
        op: String,
        attr: String,
    },

    #[error("{op}: node `{node}` has an empty input list")]
    EmptyInputList { node: String, op: String },

    #[error("tensor `{tensor}` on node `{node}` has invalid shape {shape:?}")]
    InvalidShape {
        node: String,
        tensor: String,
        shape: Vec<usize>,
    },

    #[error("node `{node}` has training_mode set; training is not supported")]
    TrainingNotSupported { node: String },

    #[error("{op}: attribute `{attr}` on node `{node}` has unsupported value `{value}`")]
    UnsupportedMode {
        node: String,
        op: String,
        attr: String,
        value: String,
    },
}
