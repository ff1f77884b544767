//! Cocktail shaker sort

use crate::trace::{Operation, Trace, TraceRecorder};

pub const NAME: &str = "Cocktail Shaker Sort";

/// Bidirectional bubble sort: a forward sweep carries the largest value to
/// the end, a backward sweep carries the smallest to the front. Stops once a
/// whole forward and backward cycle makes no swap.
pub fn cocktail_shaker_sort(input: &[i64]) -> Trace {
    if input.is_empty() {
        return TraceRecorder::empty();
    }

    let mut arr = input.to_vec();
    let mut trace = TraceRecorder::start(&arr);
    let mut start = 0;
    let mut end = arr.len() - 1;

    while start < end {
        let mut swapped = false;

        for i in start..end {
            swapped |= compare_and_swap(&mut arr, i, &mut trace);
        }
        end -= 1;

        for i in (start..end).rev() {
            swapped |= compare_and_swap(&mut arr, i, &mut trace);
        }
        start += 1;

        if !swapped {
            break;
        }
    }

    trace.finish(&arr, NAME)
}

/// Compare `arr[i]` with `arr[i + 1]`, swapping when out of order.
fn compare_and_swap(arr: &mut [i64], i: usize, trace: &mut TraceRecorder) -> bool {
    trace.record(
        Operation::Compare,
        arr,
        &[i, i + 1],
        format!(
            "Comparing {} at index {} with {} at index {}",
            arr[i],
            i,
            arr[i + 1],
            i + 1
        ),
    );
    if arr[i] <= arr[i + 1] {
        return false;
    }
    arr.swap(i, i + 1);
    trace.record(
        Operation::Swap,
        arr,
        &[i, i + 1],
        format!("Swapping {} and {}", arr[i + 1], arr[i]),
    );
    true
}
