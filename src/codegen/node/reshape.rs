//! Reshape. The target shape comes from the `shape` attribute when present,
//! otherwise from the shape input's int64 data through a runtime conversion.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let reader = AttrReader::new(node);
    let allowzero = reader.int("allowzero", 0)?;
    let attr_shape = reader.ints("shape")?;

    let x = ctx.input(node, 0, "data")?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(x, node)?;

    let shape = match attr_shape {
        Some(shape) => args::usize_array(&shape),
        None => {
            let shape_input = ctx.input(node, 1, "shape")?;
            args::runtime_slice(
                ctx,
                "isize",
                format!("reshape_shape_{}", y.ident()),
                shape_input,
            )
        }
    };

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(shape);
    call.push(allowzero.to_string());
    call.push(resolver::pointer(y));
    ctx.kernel("reshape", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;

    use crate::codegen::error::EmitError;
    use crate::ir::{ElementType, ReadyNode};

    #[test]
    fn shape_attribute_wins_over_the_input() {
        let map = map_of(vec![act("x", vec![2, 3, 4]), act("y", vec![6, 4])]);
        let node = ReadyNode::new("Reshape", "r1")
            .input("x")
            .attr_ints("shape", vec![6, 4])
            .output("y");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            "tensor_math.reshape(f32, &tensor_x, {6, 4}, 0, &tensor_y)?;\n"
        );
    }

    #[test]
    fn shape_from_initializer_converts_at_runtime() {
        let map = map_of(vec![
            act("X", vec![2, 3, 4]),
            init_of("S", ElementType::Int64, vec![2]),
            act("Y", vec![6, 4]),
        ]);
        let node = ReadyNode::new("Reshape", "r2").input("X").input("S").output("Y");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            "const reshape_shape_Y = allocator.cast_slice(isize, param_lib.tensor_S.data)?;\n\
             defer allocator.release(reshape_shape_Y);\n\
             tensor_math.reshape(f32, &tensor_X, reshape_shape_Y, 0, &tensor_Y)?;\n"
        );
    }

    #[test]
    fn no_shape_at_all_names_the_missing_argument() {
        let map = map_of(vec![act("x", vec![2, 3]), act("y", vec![6])]);
        let node = ReadyNode::new("Reshape", "r3").input("x").output("y");
        let err = emit_one(&map, &node).unwrap_err();
        assert_eq!(
            err,
            EmitError::AttributeMissing {
                node: "r3".to_string(),
                op: "Reshape".to_string(),
                attr: "shape".to_string(),
            }
        );
    }
}
