//! A single recorded event of a sort execution

use serde::{Deserialize, Serialize};

/// What kind of operation a trace entry represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// The untouched input, always the first entry
    Initial,
    /// Two positions were compared
    Compare,
    /// Two positions exchanged values
    Swap,
    /// An element was moved one slot (or one gap) to make room
    Shift,
    /// A value was written to its destination
    Place,
    /// A pivot was chosen for partitioning
    Pivot,
    /// Pass boundary, informational only
    Pass,
    /// A count bucket was incremented
    Tally,
    /// A count bucket was turned into a running total
    PrefixSum,
    /// A value was written into the output buffer
    Output,
    /// A value was copied from the output buffer back into the array
    CopyBack,
    /// The algorithm finished
    Complete,
}

impl Operation {
    /// Whether this operation moved data around in the working array.
    pub fn is_mutation(self) -> bool {
        matches!(self, Operation::Swap | Operation::Shift)
    }
}

/// Which array a step snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Buffer {
    /// The working copy of the sequence being sorted
    #[default]
    Array,
    /// The auxiliary count array of counting or radix sort
    Counts,
    /// The auxiliary output array of counting or radix sort
    Output,
}

/// One recorded event: a snapshot, the positions it concerns, and a description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Values of the snapshotted buffer at this instant
    pub step: Vec<i64>,
    /// Indices into `step` that this event is about (empty for informational entries)
    pub highlights: Vec<usize>,
    /// Human-readable description of the event
    pub message: String,
    /// Operation kind, for renderers that style steps without parsing messages
    pub operation: Operation,
    /// Buffer that `step` was taken from
    #[serde(default)]
    pub buffer: Buffer,
}

impl TraceEntry {
    /// Value under each highlighted index, skipping indices out of range.
    pub fn highlighted_values(&self) -> Vec<i64> {
        self.highlights
            .iter()
            .filter_map(|&idx| self.step.get(idx).copied())
            .collect()
    }
}
