//! Preamble and postamble emission: operator comments, log hooks, the
//! dynamic-allocation prologue, the unreachable stub, and the common
//! fallible suffix.

use crate::ir::ReadyNode;

use super::{EmissionContext, args, error::EmitError, resolver};

/// Uniform marker appended after every kernel invocation so its failure
/// propagates through the generated predict function.
pub(crate) const FALLIBLE_SUFFIX: &str = "?;";

pub(crate) fn preamble(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<(), EmitError> {
    if ctx.config().comm {
        comment(ctx, node);
    }
    if ctx.config().log {
        ctx.sink.line(format_args!(
            "log_function(\"Running {} operator\");",
            node.op_type
        ));
    }
    if ctx.config().dynamic {
        dynamic_prologue(ctx, node)?;
    }
    Ok(())
}

/// `// <OpType>: [<inputs>] -> [<outputs>]`, with original ONNX names.
fn comment(ctx: &mut EmissionContext<'_>, node: &ReadyNode) {
    let inputs = node
        .inputs
        .iter()
        .map(|slot| slot.as_deref().unwrap_or("<none>"))
        .collect::<Vec<_>>()
        .join(", ");
    let outputs = node.outputs.join(", ");
    ctx.sink.line(format_args!(
        "// {}: [{inputs}] -> [{outputs}]",
        node.op_type
    ));
}

/// Heap allocation plus scoped release for each node output. The release is
/// skipped for the network output, which must outlive the predict call.
fn dynamic_prologue(ctx: &mut EmissionContext<'_>, node: &ReadyNode) -> Result<(), EmitError> {
    for out_name in &node.outputs {
        let tensor = ctx.lookup(out_name, node)?;
        if tensor.shape.is_empty() || tensor.shape.contains(&0) {
            return Err(EmitError::InvalidShape {
                node: node.name.clone(),
                tensor: tensor.name.clone(),
                shape: tensor.shape.clone(),
            });
        }
        let token = resolver::token(tensor, node)?;
        let ident = tensor.ident();
        let dims = tensor.shape.iter().map(|&d| d as i64).collect::<Vec<_>>();
        let shape_lit = args::usize_array(&dims);

        ctx.sink
            .line(format_args!("const shape_tensor_{ident} = {shape_lit};"));
        ctx.sink.line(format_args!(
            "var tensor_{ident} = allocator.alloc({token}, shape_tensor_{ident})?;"
        ));
        if out_name.as_str() != ctx.network_output() {
            ctx.sink
                .line(format_args!("defer allocator.release(tensor_{ident});"));
        }
    }
    Ok(())
}

/// Soft failure for operators outside the registry: a source comment and an
/// unconditional runtime-unreachable marker. Emission continues so a partial
/// graph stays inspectable.
pub(crate) fn unreachable_stub(ctx: &mut EmissionContext<'_>, node: &ReadyNode) {
    log::warn!(
        "node `{}` uses unsupported operator `{}`; emitting unreachable stub",
        node.name,
        node.op_type
    );
    ctx.sink.line(format_args!(
        "// ERROR: unsupported operator {}",
        node.op_type
    ));
    ctx.sink.line(format_args!(
        "unreachable(\"unsupported operator: {}\");",
        node.op_type
    ));
}
