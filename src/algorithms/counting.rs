//! Counting sort

use crate::trace::{Buffer, Operation, Trace, TraceRecorder};

use super::{SortError, SortOptions};

pub const NAME: &str = "Counting Sort";

/// Counting sort with default options.
pub fn counting_sort(input: &[i64]) -> Result<Trace, SortError> {
    counting_sort_with(input, &SortOptions::default())
}

/// Stable counting sort over the value range `min..=max`.
///
/// Values are shifted by `min`, so negatives are fine. The count array has
/// one bucket per value in the range; ranges wider than
/// `options.max_counting_range` are rejected before anything is allocated.
pub fn counting_sort_with(input: &[i64], options: &SortOptions) -> Result<Trace, SortError> {
    let (Some(&min), Some(&max)) = (input.iter().min(), input.iter().max()) else {
        return Ok(TraceRecorder::empty());
    };

    let span = (max as i128 - min as i128 + 1) as u128;
    if span > options.max_counting_range as u128 {
        return Err(SortError::RangeTooLarge {
            min,
            max,
            span,
            limit: options.max_counting_range,
        });
    }
    let bucket = |value: i64| (value as i128 - min as i128) as usize;

    let mut arr = input.to_vec();
    let mut trace = TraceRecorder::start(&arr);
    if arr.len() < 2 {
        return Ok(trace.finish(&arr, NAME));
    }
    let mut counts = vec![0i64; span as usize];

    for &value in &arr {
        let b = bucket(value);
        counts[b] += 1;
        trace.record_buffer(
            Operation::Tally,
            Buffer::Counts,
            &counts,
            &[b],
            format!("Counting value {} in bucket {}", value, b),
        );
    }

    for b in 1..counts.len() {
        counts[b] += counts[b - 1];
        trace.record_buffer(
            Operation::PrefixSum,
            Buffer::Counts,
            &counts,
            &[b],
            format!("Bucket {} now ends at position {}", b, counts[b]),
        );
    }

    let mut output = vec![0i64; arr.len()];
    for &value in arr.iter().rev() {
        let b = bucket(value);
        counts[b] -= 1;
        let pos = counts[b] as usize;
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
            &arr,
            &[i],
            format!("Copying {} back to index {}", value, i),
        );
    }

    Ok(trace.finish(&arr, NAME))
}
