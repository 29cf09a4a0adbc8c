//! Split. Sizes come from the optional sizes input, the deprecated `split`
//! attribute, or an even division of the split dimension, in that order.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let reader = AttrReader::new(node);
    let axis = reader.int("axis", 0)?;
    let attr_sizes = reader.ints("split")?;

    let x = ctx.input(node, 0, "input")?;
    let token = resolver::token(x, node)?;

    let rank = x.shape.len() as i64;
    let normalized_axis = if axis < 0 { axis + rank } else { axis };
    if normalized_axis < 0 || normalized_axis >= rank {
        return Err(EmitError::InvalidShape {
            node: node.name.clone(),
            tensor: x.name.clone(),
            shape: x.shape.clone(),
        });
    }

    let first_out = ctx.output(node, 0)?;
    let mut outputs = ctx.scratch.take_args();
    for index in 0..node.outputs.len() {
        let output = ctx.output(node, index)?;
        outputs.push(resolver::pointer(output));
    }
    let out_list = args::brace_join(&outputs);
    ctx.scratch.put_args(outputs);

    let sizes = match ctx.optional_input(node, 1)? {
        Some(sizes_input) => match &sizes_input.value {
            // sizes data is int64 and is read as integers
            Some(value) => match value.data.to_i64s() {
                Some(sizes) => args::usize_array(&sizes),
                None => {
                    return Err(EmitError::UnsupportedMode {
                        node: node.name.clone(),
                        op: node.op_type.clone(),
                        attr: "split".to_string(),
                        value: "non-integer sizes data".to_string(),
                    });
                }
            },
            None => args::runtime_slice(
                ctx,
                "usize",
                format!("splits_{}", first_out.ident()),
                sizes_input,
            ),
        },
        None => match attr_sizes {
            Some(sizes) => args::usize_array(&sizes),
            None => {
                let dim = x.shape[normalized_axis as usize];
                let count = node.outputs.len();
                if count == 0 || dim % count != 0 {
                    return Err(EmitError::InvalidShape {
                        node: node.name.clone(),
                        tensor: x.name.clone(),
                        shape: x.shape.clone(),
                    });
                }
                args::usize_array(&vec![(dim / count) as i64; count])
            }
        },
    };

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(normalized_axis.to_string());
    call.push(sizes);
    call.push(out_list);
    ctx.kernel("split", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
