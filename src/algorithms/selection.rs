//! Selection sort

use crate::trace::{Operation, Trace, TraceRecorder};

pub const NAME: &str = "Selection Sort";

/// Scan the unsorted suffix for its minimum and swap it into place.
///
/// Records every comparison of the inner scan and one swap per outer pass
/// when the minimum is not already at the front of the suffix.
pub fn selection_sort(input: &[i64]) -> Trace {
    if input.is_empty() {
        return TraceRecorder::empty();
    }

    let mut arr = input.to_vec();
    let mut trace = TraceRecorder::start(&arr);
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in (i + 1)..n {
            trace.record(
                Operation::Compare,
                &arr,
                &[min_idx, j],
                format!(
                    "Comparing current minimum {} at index {} with {} at index {}",
                    arr[min_idx], min_idx, arr[j], j
                ),
            );
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            arr.swap(i, min_idx);
            trace.record(
                Operation::Swap,
                &arr,
                &[i, min_idx],
                format!(
                    "Swapping {} into index {} (moved {} to index {})",
                    arr[i], i, arr[min_idx], min_idx
                ),
            );
        }
    }

    trace.finish(&arr, NAME)
}
