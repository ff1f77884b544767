//! Heap sort

use crate::trace::{Operation, Trace, TraceRecorder};

pub const NAME: &str = "Heap Sort";

/// Build a max-heap in place, then repeatedly move the root to the end of
/// the shrinking heap.
pub fn heap_sort(input: &[i64]) -> Trace {
    if input.is_empty() {
        return TraceRecorder::empty();
    }

    let mut arr = input.to_vec();
    let mut trace = TraceRecorder::start(&arr);
    let n = arr.len();

    for i in (0..n / 2).rev() {
        heapify(&mut arr, n, i, &mut trace);
    }

    for end in (1..n).rev() {
        arr.swap(0, end);
        trace.record(
            Operation::Swap,
            &arr,
            &[0, end],
            format!("Moving max {} to index {}", arr[end], end),
        );
        heapify(&mut arr, end, 0, &mut trace);
    }

    trace.finish(&arr, NAME)
}

/// Sift `arr[i]` down within the heap prefix `arr[..size]`.
fn heapify(arr: &mut [i64], size: usize, i: usize, trace: &mut TraceRecorder) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    for child in [left, right] {
        if child >= size {
            continue;
        }
        trace.record(
            Operation::Compare,
            arr,
            &[largest, child],
            format!(
                "Comparing {} at index {} with child {} at index {}",
                arr[largest], largest, arr[child], child
            ),
        );
        if arr[child] > arr[largest] {
            largest = child;
        }
    }

    if largest != i {
        arr.swap(i, largest);
        trace.record(
            Operation::Swap,
            arr,
            &[i, largest],
            format!(
                "Swapping {} at index {} with {} at index {}",
                arr[i], i, arr[largest], largest
            ),
        );
        heapify(arr, size, largest, trace);
    }
}
