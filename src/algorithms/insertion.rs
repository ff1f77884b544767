//! Insertion sort

use crate::trace::{Operation, Trace, TraceRecorder};

pub const NAME: &str = "Insertion Sort";

/// Grow a sorted prefix by shifting larger elements right and dropping each
/// new key into the gap.
pub fn insertion_sort(input: &[i64]) -> Trace {
    if input.is_empty() {
        return TraceRecorder::empty();
    }

    let mut arr = input.to_vec();
    let mut trace = TraceRecorder::start(&arr);

    for i in 1..arr.len() {
        let key = arr[i];
        // `hole` is the slot the key would occupy, i.e. j + 1
        let mut hole = i;
        while hole > 0 {
            let j = hole - 1;
            trace.record(
                Operation::Compare,
                &arr,
                &[j, hole],
                format!("Comparing key {} with {} at index {}", key, arr[j], j),
            );
            if arr[j] <= key {
                break;
            }
            arr[hole] = arr[j];
            trace.record(
                Operation::Shift,
                &arr,
                &[j, hole],
                format!("Shifting {} from index {} to index {}", arr[j], j, hole),
            );
            hole = j;
        }
        arr[hole] = key;
        trace.record(
            Operation::Place,
            &arr,
            &[hole],
            format!("Placing key {} at index {}", key, hole),
        );
    }

    trace.finish(&arr, NAME)
}
