//! The operator-dispatch and kernel-emission engine.
//!
//! For each node of a topologically ordered graph, the dispatcher emits a
//! preamble (operator comment, log hook, dynamic-allocation prologue), then
//! routes the node to its operator emitter, which writes exactly one
//! `tensor_math.<kernel>(...)` invocation terminated by the common fallible
//! suffix. Emission is single-threaded and deterministic: statement order
//! equals node-visit order.

pub(crate) mod args;
pub(crate) mod attr;
mod dispatch;
pub mod error;
pub(crate) mod frame;
pub(crate) mod node;
pub(crate) mod resolver;

use core::fmt;
use std::fmt::Write as _;

pub use dispatch::{Operator, emit_graph, emit_node};

use crate::ir::{ReadyNode, ReadyTensor, TensorMap};
use error::EmitError;

/// The set of recognized emitter knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Emit heap allocation and scoped release for every non-network-output
    /// activation.
    pub dynamic: bool,
    /// Emit human-readable operator comments.
    pub comm: bool,
    /// Emit a runtime logging callback invocation before each operator.
    pub log: bool,
}

impl EmitterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn with_comments(mut self, comm: bool) -> Self {
        self.comm = comm;
        self
    }

    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }
}

/// Write-only output sink. Emission appends complete statements; nothing is
/// ever rewritten, so a failed emission leaves the buffer for the caller to
/// discard.
#[derive(Debug, Default)]
pub(crate) struct Sink {
    buf: String,
}

impl Sink {
    /// Append a complete line.
    pub(crate) fn line(&mut self, args: fmt::Arguments<'_>) {
        // writing into a String cannot fail
        let _ = self.buf.write_fmt(args);
        self.buf.push('\n');
    }

    /// Append text without terminating the line; used for kernel call sites
    /// awaiting the fallible suffix.
    pub(crate) fn open(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.buf.write_fmt(args);
    }

    /// Terminate an open kernel call with the common fallible suffix.
    pub(crate) fn close_fallible(&mut self) {
        self.buf.push_str(frame::FALLIBLE_SUFFIX);
        self.buf.push('\n');
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

/// Per-node scratch for intermediate argument strings. Buffers are recycled
/// through a single give-back point so repeated emission allocates steadily,
/// and emitted output never depends on allocator identity.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    pool: Vec<Vec<String>>,
}

impl Scratch {
    pub(crate) fn take_args(&mut self) -> Vec<String> {
        self.pool.pop().unwrap_or_default()
    }

    pub(crate) fn put_args(&mut self, mut args: Vec<String>) {
        args.clear();
        self.pool.push(args);
    }
}

/// Everything an emitter needs: the read-only tensor map, the network output
/// name, the config knobs, the output sink, and the scratch arena. Passed by
/// mutable reference into every emitter; there is no process-wide state.
pub struct EmissionContext<'a> {
    tensors: &'a TensorMap,
    network_output: &'a str,
    config: EmitterConfig,
    pub(crate) sink: Sink,
    pub(crate) scratch: Scratch,
}

impl<'a> EmissionContext<'a> {
    pub fn new(tensors: &'a TensorMap, network_output: &'a str, config: EmitterConfig) -> Self {
        Self {
            tensors,
            network_output,
            config,
            sink: Sink::default(),
            scratch: Scratch::default(),
        }
    }

    pub fn config(&self) -> EmitterConfig {
        self.config
    }

    pub fn network_output(&self) -> &'a str {
        self.network_output
    }

    /// Resolve a tensor name through the global map.
    pub(crate) fn lookup(
        &self,
        name: &str,
        node: &ReadyNode,
    ) -> Result<&'a ReadyTensor, EmitError> {
        self.tensors.get(name).ok_or_else(|| EmitError::TensorNotFound {
            node: node.name.clone(),
            tensor: name.to_string(),
        })
    }

    /// Resolve a required positional input. An absent slot surfaces
    /// [`EmitError::AttributeMissing`] naming the logical argument, since
    /// ONNX moved several of these between attributes and inputs across
    /// opsets.
    pub(crate) fn input(
        &self,
        node: &ReadyNode,
        index: usize,
        what: &str,
    ) -> Result<&'a ReadyTensor, EmitError> {
        match node.inputs.get(index).and_then(|slot| slot.as_deref()) {
            Some(name) => self.lookup(name, node),
            None => Err(EmitError::AttributeMissing {
                node: node.name.clone(),
                op: node.op_type.clone(),
                attr: what.to_string(),
            }),
        }
    }

    /// Resolve an optional positional input. `Ok(None)` when the slot is
    /// absent; a present name that fails lookup is still fatal.
    pub(crate) fn optional_input(
        &self,
        node: &ReadyNode,
        index: usize,
    ) -> Result<Option<&'a ReadyTensor>, EmitError> {
        match node.inputs.get(index).and_then(|slot| slot.as_deref()) {
            Some(name) => self.lookup(name, node).map(Some),
            None => Ok(None),
        }
    }

    /// Resolve an output by position. Outputs are never optional.
    pub(crate) fn output(
        &self,
        node: &ReadyNode,
        index: usize,
    ) -> Result<&'a ReadyTensor, EmitError> {
        match node.outputs.get(index) {
            Some(name) => self.lookup(name, node),
            None => Err(EmitError::TensorNotFound {
                node: node.name.clone(),
                tensor: format!("<output {index}>"),
            }),
        }
    }

    /// Write an open kernel call site: `tensor_math.<kernel>(<args>)`,
    /// without the fallible suffix.
    pub(crate) fn kernel(&mut self, kernel: &str, call_args: &[String]) {
        self.sink
            .open(format_args!("tensor_math.{kernel}({})", call_args.join(", ")));
    }

    /// Consume the context and return the emitted source text.
    pub fn finish(self) -> String {
        self.sink.into_string()
    }
}
