//! LSD radix sort, base 10

use crate::trace::{Buffer, Operation, Trace, TraceRecorder};

use super::SortError;

pub const NAME: &str = "Radix Sort";

const RADIX: usize = 10;

/// Sort non-negative integers one decimal digit at a time, least
/// significant first, with a stable counting pass per digit.
///
/// Count-array snapshots always have length 10.
pub fn radix_sort(input: &[i64]) -> Result<Trace, SortError> {
    if input.is_empty() {
        return Ok(TraceRecorder::empty());
    }
    if let Some((index, &value)) = input.iter().enumerate().find(|(_, v)| **v < 0) {
        return Err(SortError::NegativeValue { index, value });
    }

    let mut arr = input.to_vec();
    let mut trace = TraceRecorder::start(&arr);
    let max = arr.iter().copied().max().unwrap_or(0);
    if arr.len() < 2 {
        return Ok(trace.finish(&arr, NAME));
    }

    let mut place: i64 = 1;
    while max / place > 0 {
        trace.record(
            Operation::Pass,
            &arr,
            &[],
            format!("Sorting by digit at place value {}", place),
        );
        digit_pass(&mut arr, place, &mut trace);
        match place.checked_mul(RADIX as i64) {
            Some(next) => place = next,
            None => break,
        }
    }

    Ok(trace.finish(&arr, NAME))
}

fn digit_of(value: i64, place: i64) -> usize {
    ((value / place) % RADIX as i64) as usize
}

/// One stable counting pass keyed on the digit at `place`.
fn digit_pass(arr: &mut [i64], place: i64, trace: &mut TraceRecorder) {
    let mut counts = [0i64; RADIX];

    for &value in arr.iter() {
        let d = digit_of(value, place);
        counts[d] += 1;
        trace.record_buffer(
            Operation::Tally,
            Buffer::Counts,
            &counts,
            &[d],
            format!("Counting {} in digit bucket {}", value, d),
        );
    }

    for d in 1..RADIX {
        counts[d] += counts[d - 1];
        trace.record_buffer(
            Operation::PrefixSum,
            Buffer::Counts,
            &counts,
            &[d],
            format!("Digit bucket {} now ends at position {}", d, counts[d]),
        );
    }

    let mut output = vec![0i64; arr.len()];
    for &value in arr.iter().rev() {
        let d = digit_of(value, place);
        counts[d] -= 1;
        let pos = counts[d] as usize;
        output[pos] = value;
        trace.record_buffer(
            Operation::Output,
            Buffer::Output,
            &output,
            &[pos],
            format!("Placing {} at output index {}", value, pos),
        );
    }

    for (i, &value) in output.iter().enumerate() {
        arr[i] = value;
        trace.record(
            Operation::CopyBack,
            arr,
            &[i],
            format!("Copying {} back to index {}", value, i),
        );
    }
}
