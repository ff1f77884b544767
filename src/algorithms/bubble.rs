//! Bubble sort

use crate::trace::{Operation, Trace, TraceRecorder};

pub const NAME: &str = "Bubble Sort";

/// Repeatedly swap adjacent out-of-order pairs, stopping after a pass
/// without swaps.
pub fn bubble_sort(input: &[i64]) -> Trace {
    if input.is_empty() {
        return TraceRecorder::empty();
    }

    let mut arr = input.to_vec();
    let mut trace = TraceRecorder::start(&arr);
    let n = arr.len();

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            trace.record(
                Operation::Compare,
                &arr,
                &[j, j + 1],
                format!(
                    "Comparing {} at index {} with {} at index {}",
                    arr[j],
                    j,
                    arr[j + 1],
                    j + 1
                ),
            );
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                trace.record(
                    Operation::Swap,
                    &arr,
                    &[j, j + 1],
                    format!("Swapping {} and {}", arr[j + 1], arr[j]),
                );
            }
        }
        if !swapped {
            break;
        }
    }

    trace.finish(&arr, NAME)
}
