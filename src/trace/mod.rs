//! Recorded history of one sort execution.
//!
//! A [`Trace`] is a single append-only list of [`TraceEntry`] records. The
//! three parallel views a renderer usually wants (snapshots, highlight sets,
//! messages) are projections of that list, so they can never disagree in
//! length.

mod entry;
mod recorder;

use serde::{Deserialize, Serialize};

pub use entry::{Buffer, Operation, TraceEntry};
pub use recorder::TraceRecorder;

/// Message of the first entry of every non-empty trace
pub const INITIAL_MESSAGE: &str = "Initial array";

/// Message of the only entry of an empty-input trace
pub const EMPTY_MESSAGE: &str = "Empty array. Nothing to sort.";

/// Ordered, non-empty list of recorded events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrace")]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

#[derive(Deserialize)]
struct RawTrace {
    entries: Vec<TraceEntry>,
}

impl TryFrom<RawTrace> for Trace {
    type Error = String;

    fn try_from(raw: RawTrace) -> Result<Self, Self::Error> {
        if raw.entries.is_empty() {
            return Err("a trace must contain at least one entry".to_string());
        }
        Ok(Self {
            entries: raw.entries,
        })
    }
}

impl Trace {
    pub(crate) fn from_entries(entries: Vec<TraceEntry>) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries }
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&TraceEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The initial entry (or the only entry of an empty-input trace).
    pub fn first(&self) -> &TraceEntry {
        &self.entries[0]
    }

    /// The completion entry.
    pub fn last(&self) -> &TraceEntry {
        &self.entries[self.entries.len() - 1]
    }

    /// The sorted sequence, i.e. the snapshot of the completion entry.
    pub fn final_state(&self) -> &[i64] {
        &self.last().step
    }

    /// Array snapshots, one per entry.
    pub fn steps(&self) -> Vec<&[i64]> {
        self.entries.iter().map(|e| e.step.as_slice()).collect()
    }

    /// Highlight sets, one per entry.
    pub fn highlights(&self) -> Vec<&[usize]> {
        self.entries.iter().map(|e| e.highlights.as_slice()).collect()
    }

    /// Messages, one per entry.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// Split into the classic three parallel sequences.
    pub fn into_parts(self) -> (Vec<Vec<i64>>, Vec<Vec<usize>>, Vec<String>) {
        let mut steps = Vec::with_capacity(self.entries.len());
        let mut highlights = Vec::with_capacity(self.entries.len());
        let mut messages = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            steps.push(entry.step);
            highlights.push(entry.highlights);
            messages.push(entry.message);
        }
        (steps, highlights, messages)
    }

    /// How many entries carry the given operation.
    pub fn count(&self, operation: Operation) -> usize {
        self.entries
            .iter()
            .filter(|e| e.operation == operation)
            .count()
    }

    /// Number of swaps and shifts, i.e. entries that moved data.
    pub fn mutation_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.operation.is_mutation())
            .count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
