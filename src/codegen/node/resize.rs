//! Resize, with the full set of enumerated mode strings validated at
//! emission.

use super::prelude::*;

const MODES: [&str; 3] = ["nearest", "linear", "cubic"];
const COORD_MODES: [&str; 6] = [
    "half_pixel",
    "half_pixel_symmetric",
    "pytorch_half_pixel",
    "align_corners",
    "asymmetric",
    "tf_crop_and_resize",
];
const NEAREST_MODES: [&str; 4] = [
    "round_prefer_floor",
    "round_prefer_ceil",
    "floor",
    "ceil",
];
const ASPECT_POLICIES: [&str; 3] = ["stretch", "not_larger", "not_smaller"];

fn enum_attr(
    node: &ReadyNode,
    name: &str,
    default: &str,
    allowed: &[&str],
) -> Result<String, EmitError> {
    let value = AttrReader::new(node).string(name, default)?;
    if !allowed.contains(&value.as_str()) {
        return Err(EmitError::UnsupportedMode {
            node: node.name.clone(),
            op: node.op_type.clone(),
            attr: name.to_string(),
            value,
        });
    }
    Ok(value)
}

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let reader = AttrReader::new(node);
    let antialias = reader.int("antialias", 0)?;
    let axes = reader.ints("axes")?.unwrap_or_default();
    let cubic_coeff_a = reader.float("cubic_coeff_a", -0.75)?;
    let exclude_outside = reader.int("exclude_outside", 0)?;
    let extrapolation_value = reader.float("extrapolation_value", 0.0)?;
    let mode = enum_attr(node, "mode", "nearest", &MODES)?;
    let coord_mode = enum_attr(
        node,
        "coordinate_transformation_mode",
        "half_pixel",
        &COORD_MODES,
    )?;
    let nearest_mode = enum_attr(node, "nearest_mode", "round_prefer_floor", &NEAREST_MODES)?;
    let aspect_policy = enum_attr(node, "keep_aspect_ratio_policy", "stretch", &ASPECT_POLICIES)?;

    let x = ctx.input(node, 0, "X")?;
    let roi = ctx.optional_input(node, 1)?;
    let scales = ctx.optional_input(node, 2)?;
    let sizes = ctx.optional_input(node, 3)?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(x, node)?;

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(x));
    call.push(args::null_or_pointer(roi));
    call.push(args::null_or_pointer(scales));
    call.push(args::null_or_pointer(sizes));
    call.push(resolver::pointer(y));
    call.push(args::str_lit(&mode));
    call.push(args::str_lit(&coord_mode));
    call.push(args::str_lit(&nearest_mode));
    call.push(args::f32_lit(cubic_coeff_a));
    call.push(exclude_outside.to_string());
    call.push(args::f32_lit(extrapolation_value));
    call.push(antialias.to_string());
    call.push(args::str_lit(&aspect_policy));
    call.push(args::usize_array(&axes));
    ctx.kernel("resize", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
