//! Plain-text rendering of trace entries for the terminal

use crate::algorithms::Algorithm;
use crate::trace::{Buffer, Operation, Trace, TraceEntry};

/// Render the values of a step, bracketing highlighted positions.
pub fn values(entry: &TraceEntry) -> String {
    entry
        .step
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            if entry.highlights.contains(&idx) {
                format!("[{value}]")
            } else {
                value.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per entry: position, buffer, values and message.
pub fn frame(position: usize, total: usize, entry: &TraceEntry) -> String {
    let width = total.to_string().len();
    let label = match entry.buffer {
        Buffer::Array => "",
        Buffer::Counts => "counts: ",
        Buffer::Output => "output: ",
    };
    format!(
        "[{:>width$}/{}] {}{} | {}",
        position,
        total.saturating_sub(1),
        label,
        values(entry),
        entry.message,
        width = width
    )
}

/// One summary line per algorithm run.
pub fn summary_line(algorithm: Algorithm, trace: &Trace) -> String {
    format!(
        "{:<22} {:>6} steps {:>6} comparisons {:>6} swaps/shifts  {:?}",
        algorithm.display_name(),
        trace.len(),
        trace.count(Operation::Compare),
        trace.mutation_count(),
        trace.final_state()
    )
}
