//! Matrix multiply with shape-dependent kernel selection.

use super::prelude::*;

/// Platform cache-line size assumed by the blocked kernel.
const CACHE_LINE_BYTES: usize = 64;

/// Emit `matmul_blocked` when a full row of B spans at least one cache line
/// (last-dim width × element width), `matmul` otherwise. Both kernels
/// produce identical outputs.
pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let a = ctx.input(node, 0, "A")?;
    let b = ctx.input(node, 1, "B")?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(a, node)?;
    let elem_width = resolver::byte_width(a, node)?;

    let last_dim = *b.shape.last().ok_or_else(|| EmitError::InvalidShape {
        node: node.name.clone(),
        tensor: b.name.clone(),
        shape: b.shape.clone(),
    })?;
    let kernel = if last_dim * elem_width >= CACHE_LINE_BYTES {
        "matmul_blocked"
    } else {
        "matmul"
    };

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(a));
    call.push(resolver::pointer(b));
    call.push(resolver::pointer(y));
    ctx.kernel(kernel, &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
