//! Shell sort

use crate::trace::{Operation, Trace, TraceRecorder};

pub const NAME: &str = "Shell Sort";

/// Gapped insertion sort with the halving gap sequence n/2, n/4, ..., 1.
pub fn shell_sort(input: &[i64]) -> Trace {
    if input.is_empty() {
        return TraceRecorder::empty();
    }

    let mut arr = input.to_vec();
    let mut trace = TraceRecorder::start(&arr);
    let n = arr.len();
    let mut gap = n / 2;

    while gap > 0 {
        trace.record(
            Operation::Pass,
            &arr,
            &[],
            format!("Starting pass with gap {}", gap),
        );
        for i in gap..n {
            let temp = arr[i];
            let mut j = i;
            while j >= gap && arr[j - gap] > temp {
                arr[j] = arr[j - gap];
                trace.record(
                    Operation::Shift,
                    &arr,
                    &[j - gap, j],
                    format!(
                        "Shifting {} from index {} to index {}",
                        arr[j],
                        j - gap,
                        j
                    ),
                );
                j -= gap;
            }
            arr[j] = temp;
            trace.record(
                Operation::Place,
                &arr,
                &[j],
                format!("Inserting {} at index {}", temp, j),
            );
        }
        gap /= 2;
    }

    trace.finish(&arr, NAME)
}
