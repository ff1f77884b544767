//! Append-only builder that algorithms record into

use super::entry::{Buffer, Operation, TraceEntry};
use super::{Trace, EMPTY_MESSAGE, INITIAL_MESSAGE};

/// Collects trace entries while an algorithm runs.
///
/// A recorder always starts with the initial snapshot and is consumed by
/// [`TraceRecorder::finish`], so every trace it produces begins with
/// "Initial array" and ends with a completion entry. Recursive helpers take
/// it by `&mut` so entries land in execution order.
#[derive(Debug)]
pub struct TraceRecorder {
    entries: Vec<TraceEntry>,
}

impl TraceRecorder {
    /// Start a trace from the untouched input.
    pub fn start(input: &[i64]) -> Self {
        Self {
            entries: vec![TraceEntry {
                step: input.to_vec(),
                highlights: Vec::new(),
                message: INITIAL_MESSAGE.to_string(),
                operation: Operation::Initial,
                buffer: Buffer::Array,
            }],
        }
    }

    /// Record a snapshot of the working array.
    pub fn record(
        &mut self,
        operation: Operation,
        array: &[i64],
        highlights: &[usize],
        message: impl Into<String>,
    ) {
        self.record_buffer(operation, Buffer::Array, array, highlights, message);
    }

    /// Record a snapshot of an arbitrary buffer (count or output array).
    pub fn record_buffer(
        &mut self,
        operation: Operation,
        buffer: Buffer,
        snapshot: &[i64],
        highlights: &[usize],
        message: impl Into<String>,
    ) {
        self.entries.push(TraceEntry {
            step: snapshot.to_vec(),
            highlights: highlights.to_vec(),
            message: message.into(),
            operation,
            buffer,
        });
    }

    /// Number of entries recorded so far, the initial one included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append the completion entry and seal the trace.
    pub fn finish(mut self, sorted: &[i64], algorithm_name: &str) -> Trace {
        self.entries.push(TraceEntry {
            step: sorted.to_vec(),
            highlights: Vec::new(),
            message: format!("{algorithm_name} completed"),
            operation: Operation::Complete,
            buffer: Buffer::Array,
        });
        Trace::from_entries(self.entries)
    }

    /// The one-entry trace returned for an empty input.
    pub fn empty() -> Trace {
        Trace::from_entries(vec![TraceEntry {
            step: Vec::new(),
            highlights: Vec::new(),
            message: EMPTY_MESSAGE.to_string(),
            operation: Operation::Complete,
            buffer: Buffer::Array,
        }])
    }
}
