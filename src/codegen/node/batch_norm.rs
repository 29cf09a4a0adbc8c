//! BatchNormalization in inference mode. X, scale, and mean may carry
//! different element types, so three tokens travel with the call.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let reader = AttrReader::new(node);
    if reader.int("training_mode", 0)? != 0 {
        return Err(EmitError::TrainingNotSupported {
            node: node.name.clone(),
        });
    }
    let epsilon = reader.float("epsilon", 1e-5)?;
    let momentum = reader.float("momentum", 0.9)?;

    let x = ctx.input(node, 0, "X")?;
    let scale = ctx.input(node, 1, "scale")?;
    let b = ctx.input(node, 2, "B")?;
    let mean = ctx.input(node, 3, "input_mean")?;
    let var = ctx.input(node, 4, "input_var")?;
    let y = ctx.output(node, 0)?;

    let mut call = ctx.scratch.take_args();
    call.push(resolver::token(x, node)?.to_string());
    call.push(resolver::token(scale, node)?.to_string());
    call.push(resolver::token(mean, node)?.to_string());
    call.push(resolver::pointer(x));
    call.push(resolver::pointer(scale));
    call.push(resolver::pointer(b));
    call.push(resolver::pointer(mean));
    call.push(resolver::pointer(var));
    call.push(args::f32_lit(epsilon));
    call.push(args::f32_lit(momentum));
    call.push(resolver::pointer(y));
    ctx.kernel("batch_norm", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
