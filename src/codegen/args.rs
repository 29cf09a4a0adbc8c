//! Argument materialization: the canonical textual forms consumed by kernel
//! call sites.

use core::fmt::Write as _;

use crate::ir::ReadyTensor;

use super::{EmissionContext, resolver};

/// Compile-time usize array literal from an int list. A present-but-empty
/// list renders as `{}`, which is distinct from the `null` marker.
pub(crate) fn usize_array(values: &[i64]) -> String {
    let mut out = String::from("{");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{v}");
    }
    out.push('}');
    out
}

/// Float array literal, e.g. a Constant node's inline payload.
pub(crate) fn f32_array(values: &[f32]) -> String {
    let mut out = String::from("{");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{v:?}");
    }
    out.push('}');
    out
}

/// Brace-joined list of already-materialized arguments, e.g. a pointer list
/// for variadic kernels.
pub(crate) fn brace_join(items: &[String]) -> String {
    format!("{{{}}}", items.join(", "))
}

/// `null` for an absent optional input, a pointer form otherwise.
pub(crate) fn null_or_pointer(tensor: Option<&ReadyTensor>) -> String {
    match tensor {
        Some(t) => resolver::pointer(t),
        None => "null".to_string(),
    }
}

/// Deterministic shortest-round-trip float literal.
pub(crate) fn f32_lit(v: f32) -> String {
    format!("{v:?}")
}

pub(crate) fn str_lit(s: &str) -> String {
    format!("\"{s}\"")
}

/// Emit a runtime-built slice: a local conversion of the tensor's data
/// buffer into a typed slice, paired with a deferred release so the
/// acquisition is balanced on every exit path of the node's emission window.
/// Returns the local's name for use as a kernel argument.
pub(crate) fn runtime_slice(
    ctx: &mut EmissionContext<'_>,
    elem: &str,
    local: String,
    source: &ReadyTensor,
) -> String {
    let source = resolver::value(source);
    ctx.sink.line(format_args!(
        "const {local} = allocator.cast_slice({elem}, {source}.data)?;"
    ));
    ctx.sink
        .line(format_args!("defer allocator.release({local});"));
    local
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ElementType, TensorCategory};

    #[test]
    fn array_literals_render_deterministically() {
        assert_eq!(usize_array(&[3, 3]), "{3, 3}");
        assert_eq!(usize_array(&[1]), "{1}");
        assert_eq!(usize_array(&[]), "{}");
    }

    #[test]
    fn absent_optional_input_is_null() {
        assert_eq!(null_or_pointer(None), "null");
        let b = ReadyTensor::new("B", TensorCategory::Initializer, ElementType::Float32, vec![1]);
        assert_eq!(null_or_pointer(Some(&b)), "@const_ref(param_lib.tensor_B)");
    }

    #[test]
    fn float_literals_round_trip() {
        assert_eq!(f32_lit(1.0), "1.0");
        assert_eq!(f32_lit(0.01), "0.01");
        assert_eq!(f32_lit(-0.75), "-0.75");
        assert_eq!(f32_lit(1e-5), "1e-5");
    }
}
