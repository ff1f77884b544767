//! Merge sort

use crate::trace::{Operation, Trace, TraceRecorder};

pub const NAME: &str = "Merge Sort";

/// Top-down merge sort. Every write performed while merging two sorted
/// halves is recorded at its absolute index.
pub fn merge_sort(input: &[i64]) -> Trace {
    if input.is_empty() {
        return TraceRecorder::empty();
    }

    let mut arr = input.to_vec();
    let mut trace = TraceRecorder::start(&arr);
    let len = arr.len();
    sort_range(&mut arr, 0, len, &mut trace);
    trace.finish(&arr, NAME)
}

/// Sort the half-open range `start..end`.
fn sort_range(arr: &mut [i64], start: usize, end: usize, trace: &mut TraceRecorder) {
    if end - start < 2 {
        return;
    }
    let mid = start + (end - start) / 2;
    sort_range(arr, start, mid, trace);
    sort_range(arr, mid, end, trace);
    merge(arr, start, mid, end, trace);
}

fn merge(arr: &mut [i64], start: usize, mid: usize, end: usize, trace: &mut TraceRecorder) {
    let left = arr[start..mid].to_vec();
    let right = arr[mid..end].to_vec();
    let (mut i, mut j) = (0, 0);

    for k in 0..(end - start) {
        // ties go left to keep the sort stable
        let (value, side) = if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            i += 1;
            (left[i - 1], "left")
        } else {
            j += 1;
            (right[j - 1], "right")
        };
        let pos = start + k;
        arr[pos] = value;
        trace.record(
            Operation::Place,
            arr,
            &[pos],
            format!("Placing {} from the {} half at index {}", value, side, pos),
        );
    }
}
