//! Constant. Tensor-valued constants were hoisted to the parameter library
//! by an external pre-pass, so only a comment marks the node site; scalar
//! and 1-D numeric values materialize inline. Emits no kernel call.

use super::prelude::*;
use crate::codegen::args::{f32_array, usize_array};

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let y = ctx.output(node, 0)?;
    let ident = y.ident();
    let reader = AttrReader::new(node);

    if reader.tensor("value")?.is_some() || reader.sparse_tensor("sparse_value")?.is_some() {
        ctx.sink.line(format_args!(
            "// Constant {}: tensor value hoisted to the parameter library",
            y.name
        ));
        return Ok(KernelCall::None);
    }
    if let Some(value) = reader.float_opt("value_float")? {
        ctx.sink.line(format_args!(
            "tensor_{ident}.set_data({});",
            f32_array(&[value])
        ));
        return Ok(KernelCall::None);
    }
    if let Some(values) = reader.floats("value_floats")? {
        ctx.sink.line(format_args!(
            "tensor_{ident}.set_data({});",
            f32_array(&values)
        ));
        return Ok(KernelCall::None);
    }
    if let Some(value) = reader.int_opt("value_int")? {
        ctx.sink.line(format_args!(
            "tensor_{ident}.set_data({});",
            usize_array(&[value])
        ));
        return Ok(KernelCall::None);
    }
    if let Some(values) = reader.ints("value_ints")? {
        ctx.sink.line(format_args!(
            "tensor_{ident}.set_data({});",
            usize_array(&values)
        ));
        return Ok(KernelCall::None);
    }
    if reader.string_opt("value_string")?.is_some() || reader.strings("value_strings")?.is_some() {
        ctx.sink.line(format_args!(
            "// string constant {} emitted as zero placeholder",
            y.name
        ));
        ctx.sink
            .line(format_args!("tensor_{ident}.set_data({{0}});"));
        return Ok(KernelCall::None);
    }

    Err(EmitError::AttributeMissing {
        node: node.name.clone(),
        op: node.op_type.clone(),
        attr: "value".to_string(),
    })
}
