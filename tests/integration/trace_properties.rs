//! Cross-algorithm trace properties
//!
//! Every algorithm must produce a sorted final step, aligned projections,
//! the fixed first and last entries, and must leave its input alone.

use super::common::fixtures::{
    assert_trace_invariants, fixed_inputs, input_strategy, reference_sort,
};
use proptest::prelude::*;
use sortrace::{Algorithm, Buffer, Operation, SortError, SortOptions};

#[test]
fn test_fixed_inputs_satisfy_invariants() {
    for algorithm in Algorithm::ALL {
        for input in fixed_inputs(algorithm) {
            let trace = algorithm.sort(&input).unwrap();
            assert_trace_invariants(algorithm, &input, &trace);
        }
    }
}

#[test]
fn test_empty_input_for_every_algorithm() {
    for algorithm in Algorithm::ALL {
        let trace = algorithm.sort(&[]).unwrap();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.first().message, "Empty array. Nothing to sort.");
        assert!(trace.first().step.is_empty());
    }
}

#[test]
fn test_single_element_records_only_start_and_finish() {
    for algorithm in Algorithm::ALL {
        let trace = algorithm.sort(&[42]).unwrap();
        assert_eq!(trace.len(), 2, "{algorithm}");
        assert_eq!(trace.final_state(), &[42]);
    }
}

#[test]
fn test_input_is_not_mutated() {
    let input = vec![4, -2, 9, 0, 4, 1];
    let before = input.clone();
    for algorithm in Algorithm::ALL {
        let _ = algorithm.sort(&input);
        assert_eq!(input, before, "{algorithm} changed its input");
    }
}

/// Re-sorting sorted output reports no swaps or shifts. Heap sort is the
/// exception: building a max-heap reorders an ascending array.
#[test]
fn test_sorted_input_reports_no_data_movement() {
    let unsorted = vec![8, 3, 5, 3, 0, 9, 1];
    for algorithm in Algorithm::ALL {
        let sorted = algorithm.sort(&unsorted).unwrap().final_state().to_vec();
        let trace = algorithm.sort(&sorted).unwrap();
        assert_eq!(trace.final_state(), sorted.as_slice());
        if algorithm == Algorithm::Heap {
            continue;
        }
        assert_eq!(trace.mutation_count(), 0, "{algorithm} moved data");
    }
}

#[test]
fn test_bubble_three_values_scenario() {
    let trace = Algorithm::Bubble.sort(&[5, 3, 1]).unwrap();
    assert_eq!(trace.final_state(), &[1, 3, 5]);
    assert!(trace.len() >= 5);
}

#[test]
fn test_selection_all_equal_scenario() {
    let trace = Algorithm::Selection.sort(&[2, 2, 2]).unwrap();
    assert_eq!(trace.count(Operation::Swap), 0);
    assert!(trace.iter().all(|e| !e.message.starts_with("Swapping")));
    assert_eq!(trace.final_state(), &[2, 2, 2]);
}

#[test]
fn test_radix_scenario_uses_ten_buckets() {
    let trace = Algorithm::Radix
        .sort(&[170, 45, 75, 90, 802, 24, 2, 66])
        .unwrap();
    assert_eq!(trace.final_state(), &[2, 24, 45, 66, 75, 90, 170, 802]);
    let counts: Vec<_> = trace.iter().filter(|e| e.buffer == Buffer::Counts).collect();
    assert!(!counts.is_empty());
    assert!(counts.iter().all(|e| e.step.len() == 10));
}

#[test]
fn test_counting_negative_scenario() {
    let trace = Algorithm::Counting.sort(&[-3, 1, -1]).unwrap();
    assert_eq!(trace.final_state(), &[-3, -1, 1]);
}

#[test]
fn test_domain_errors() {
    assert_eq!(
        Algorithm::Radix.sort(&[1, -4]).unwrap_err(),
        SortError::NegativeValue { index: 1, value: -4 }
    );

    let options = SortOptions {
        max_counting_range: 100,
    };
    let err = Algorithm::Counting
        .sort_with(&[0, 1_000], &options)
        .unwrap_err();
    assert!(matches!(err, SortError::RangeTooLarge { limit: 100, .. }));
}

/// Default options reject ranges whose count snapshots would dominate memory
#[test]
fn test_counting_default_limit_rejects_wide_ranges() {
    let err = Algorithm::Counting.sort(&[0, 99_999]).unwrap_err();
    assert!(matches!(err, SortError::RangeTooLarge { span: 100_000, .. }));
    assert!(Algorithm::Counting.sort(&[-500, 499]).is_ok());
}

#[test]
fn test_traces_are_deterministic() {
    let input = vec![6, 1, 8, 1, 0, -4, 3];
    for algorithm in Algorithm::ALL.into_iter().filter(|a| *a != Algorithm::Radix) {
        assert_eq!(algorithm.sort(&input), algorithm.sort(&input), "{algorithm}");
    }
}

proptest! {
    #[test]
    fn prop_every_algorithm_sorts_within_its_domain(
        (algorithm, input) in proptest::sample::select(Algorithm::ALL.to_vec())
            .prop_flat_map(|a| (Just(a), input_strategy(a)))
    ) {
        let original = input.clone();
        let trace = algorithm.sort(&input).unwrap();
        prop_assert_eq!(&input, &original);
        let expected = reference_sort(&input);
        prop_assert_eq!(trace.final_state(), expected.as_slice());
        assert_trace_invariants(algorithm, &input, &trace);
    }

    #[test]
    fn prop_step_lengths_are_fixed_per_buffer(input in input_strategy(Algorithm::Counting)) {
        let trace = Algorithm::Counting.sort(&input).unwrap();
        if let (Some(min), Some(max)) = (input.iter().min(), input.iter().max()) {
            let span = (max - min + 1) as usize;
            for entry in &trace {
                let expected = match entry.buffer {
                    Buffer::Counts => span,
                    Buffer::Array | Buffer::Output => input.len(),
                };
                prop_assert_eq!(entry.step.len(), expected);
            }
        }
    }
}
