//! Quick sort with Lomuto partitioning

use crate::trace::{Operation, Trace, TraceRecorder};

pub const NAME: &str = "Quick Sort";

/// Partition around the last element of each range, then recurse on both
/// sides of the pivot.
pub fn quick_sort(input: &[i64]) -> Trace {
    if input.is_empty() {
        return TraceRecorder::empty();
    }

    let mut arr = input.to_vec();
    let mut trace = TraceRecorder::start(&arr);
    let high = arr.len() - 1;
    sort_range(&mut arr, 0, high, &mut trace);
    trace.finish(&arr, NAME)
}

/// Sort the inclusive range `low..=high`.
fn sort_range(arr: &mut [i64], low: usize, high: usize, trace: &mut TraceRecorder) {
    if low >= high {
        return;
    }
    let pivot_idx = partition(arr, low, high, trace);
    if pivot_idx > low {
        sort_range(arr, low, pivot_idx - 1, trace);
    }
    sort_range(arr, pivot_idx + 1, high, trace);
}

/// Lomuto partition of `low..=high`; returns the pivot's final index.
fn partition(arr: &mut [i64], low: usize, high: usize, trace: &mut TraceRecorder) -> usize {
    let pivot = arr[high];
    trace.record(
        Operation::Pivot,
        arr,
        &[high],
        format!("Choosing pivot {} at index {}", pivot, high),
    );

    // next slot for an element <= pivot
    let mut store = low;
    for j in low..high {
        trace.record(
            Operation::Compare,
            arr,
            &[j, high],
            format!("Comparing {} at index {} with pivot {}", arr[j], j, pivot),
        );
        if arr[j] <= pivot {
            if store != j {
                arr.swap(store, j);
                trace.record(
                    Operation::Swap,
                    arr,
                    &[store, j],
                    format!(
                        "Swapping {} at index {} with {} at index {}",
                        arr[store], store, arr[j], j
                    ),
                );
            }
            store += 1;
        }
    }

    if store != high {
        arr.swap(store, high);
        trace.record(
            Operation::Swap,
            arr,
            &[store, high],
            format!("Placing pivot {} at index {}", pivot, store),
        );
    }
    store
}
