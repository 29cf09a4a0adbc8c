//! Gemm: Y = alpha·op(A)·op(B) + beta·C, with optional C.

use super::prelude::*;

pub(crate) fn emit(
    ctx: &mut EmissionContext<'_>,
    node: &ReadyNode,
) -> Result<KernelCall, EmitError> {
    let reader = AttrReader::new(node);
    let alpha = reader.float("alpha", 1.0)?;
    let beta = reader.float("beta", 1.0)?;
    let trans_a = reader.int("transA", 0)?;
    let trans_b = reader.int("transB", 0)?;

    let a = ctx.input(node, 0, "A")?;
    let b = ctx.input(node, 1, "B")?;
    // absent C is a zero bias
    let c = ctx.optional_input(node, 2)?;
    let y = ctx.output(node, 0)?;
    let token = resolver::token(a, node)?;

    let mut call = ctx.scratch.take_args();
    call.push(token.to_string());
    call.push(resolver::pointer(a));
    call.push(resolver::pointer(b));
    call.push(args::null_or_pointer(c));
    call.push(args::f32_lit(alpha));
    call.push(args::f32_lit(beta));
    call.push(trans_a.to_string());
    call.push(trans_b.to_string());
    call.push(resolver::pointer(y));
    ctx.kernel("gemm", &call);
    ctx.scratch.put_args(call);
    Ok(KernelCall::Fallible)
}
