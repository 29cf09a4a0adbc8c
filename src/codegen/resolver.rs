//! Name and type resolution (addressing forms and type tokens).

use crate::ir::{ElementType, ReadyNode, ReadyTensor, TensorCategory};

use super::error::EmitError;

/// The textual expression denoting a pointer to the tensor's storage.
///
/// Initializers live in the parameter library and need the const-cast
/// wrapper to satisfy call sites expecting a mutable-looking pointer; all
/// other categories are locals of the generated predict function.
pub(crate) fn pointer(tensor: &ReadyTensor) -> String {
    match tensor.category {
        TensorCategory::Initializer => {
            format!("@const_ref(param_lib.tensor_{})", tensor.ident())
        }
        _ => format!("&tensor_{}", tensor.ident()),
    }
}

/// The textual expression denoting the tensor's value.
pub(crate) fn value(tensor: &ReadyTensor) -> String {
    match tensor.category {
        TensorCategory::Initializer => format!("param_lib.tensor_{}", tensor.ident()),
        _ => format!("tensor_{}", tensor.ident()),
    }
}

/// Resolve the element type: the tensor's own `dtype` wins, then the
/// payload's type, then failure. Never defaults silently.
pub(crate) fn dtype(tensor: &ReadyTensor, node: &ReadyNode) -> Result<ElementType, EmitError> {
    if tensor.dtype.is_defined() {
        return Ok(tensor.dtype);
    }
    if let Some(value) = &tensor.value {
        let elem = value.elem_type();
        if elem.is_defined() {
            return Ok(elem);
        }
    }
    Err(EmitError::MissingTypeInformation {
        node: node.name.clone(),
        tensor: tensor.name.clone(),
    })
}

/// The type token spelled into the kernel call for this tensor.
pub(crate) fn token(
    tensor: &ReadyTensor,
    node: &ReadyNode,
) -> Result<&'static str, EmitError> {
    let elem = dtype(tensor, node)?;
    elem.token().ok_or_else(|| EmitError::MissingTypeInformation {
        node: node.name.clone(),
        tensor: tensor.name.clone(),
    })
}

/// Element width in bytes, for shape-dependent kernel selection.
pub(crate) fn byte_width(tensor: &ReadyTensor, node: &ReadyNode) -> Result<usize, EmitError> {
    let elem = dtype(tensor, node)?;
    elem.byte_width().ok_or_else(|| EmitError::MissingTypeInformation {
        node: node.name.clone(),
        tensor: tensor.name.clone(),
    })
}
