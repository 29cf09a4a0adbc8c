//! Pad. The pads input must be an initializer; constant_value and axes are
//! optional.

use super::prelude::*;

const MODES: [&str; 4] = ["constant", "reflect", "edge", "wrap"];

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let mode = AttrReader::new(node).string("mode", "constant")?;
    if !MODES.contains(&mode.as_str()) {
        return Err(EmitError::UnsupportedMode {
            node: node.name.clone(),
            op: node.op_type.clone(),
            attr: "mode".to_string(),
            value: mode,
        });
    }

    let x = ctx.input(node, 0, "data")?;
    let pads = ctx.input(node, 1, "pads")?;
    if !pads.is_initializer() {
        return Err(EmitError::UnsupportedMode {
            node: node.name.clone(),
            op: node.op_type.clone(),
            attr: "pads".to_string(),
            value: "runtime tensor".to_string(),
        });
    }
    let constant_value = ctx.optional_input(node, 2)?;
    let axes = ctx.optional_input(node, 3)?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(x, node)?;

    let pads_local = args::runtime_slice(ctx, "isize", format!("pads_{}", y.ident()), pads);

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(pads_local);
    call.push(args::str_lit(&mode));
    call.push(args::null_or_pointer(constant_value));
    call.push(args::null_or_pointer(axes));
    call.push(resolver::pointer(y));
    ctx.kernel("pad", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;

    use crate::codegen::error::EmitError;
    use crate::ir::{ElementType, ReadyNode};

    #[test]
    fn pads_initializer_converts_with_scoped_release() {
        let map = map_of(vec![
            act("x", vec![2, 2]),
            init_of("p", ElementType::Int64, vec![4]),
            act("y", vec![4, 4]),
        ]);
        let node = ReadyNode::new("Pad", "pad1").input("x").input("p").output("y");
        let code = emit_one(&map, &node).unwrap();
        assert_eq!(
            code,
            "const pads_y = allocator.cast_slice(isize, param_lib.tensor_p.data)?;\n\
             defer allocator.release(pads_y);\n\
             tensor_math.pad(f32, &tensor_x, pads_y, \"constant\", null, null, &tensor_y)?;\n"
        );
    }

    #[test]
    fn runtime_pads_tensor_is_an_unsupported_combination() {
        let map = map_of(vec![
            act("x", vec![2, 2]),
            act_of("p", ElementType::Int64, vec![4]),
            act("y", vec![4, 4]),
        ]);
        let node = ReadyNode::new("Pad", "pad2").input("x").input("p").output("y");
        let err = emit_one(&map, &node).unwrap_err();
        assert!(matches!(err, EmitError::UnsupportedMode { .. }), "{err:?}");
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let map = map_of(vec![
            act("x", vec![2, 2]),
            init_of("p", ElementType::Int64, vec![4]),
            act("y", vec![4, 4]),
        ]);
        let node = ReadyNode::new("Pad", "pad3")
            .input("x")
            .input("p")
            .attr_string("mode", "mirror")
            .output("y");
        let err = emit_one(&map, &node).unwrap_err();
        assert_eq!(
            err,
            EmitError::UnsupportedMode {
                node: "pad3".to_string(),
                op: "Pad".to_string(),
                attr: "mode".to_string(),
                value: "mirror".to_string(),
            }
        );
    }
}
