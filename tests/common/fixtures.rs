//! Inputs and invariant checks shared across integration tests

use proptest::prelude::*;
use sortrace::{Algorithm, Operation, Trace};

/// Inputs every algorithm must handle, negatives excluded for radix sort.
pub fn fixed_inputs(algorithm: Algorithm) -> Vec<Vec<i64>> {
    let mut inputs = vec![
        vec![],
        vec![7],
        vec![2, 1],
        vec![5, 3, 1],
        vec![2, 2, 2],
        vec![1, 2, 3, 4, 5],
        vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        vec![170, 45, 75, 90, 802, 24, 2, 66],
        vec![3, 0, 3, 1, 0, 2, 2, 1],
    ];
    if algorithm != Algorithm::Radix {
        inputs.push(vec![-3, 1, -1]);
        inputs.push(vec![0, -10, 10, -5, 5]);
    }
    inputs
}

/// The trusted answer.
pub fn reference_sort(input: &[i64]) -> Vec<i64> {
    let mut sorted = input.to_vec();
    sorted.sort();
    sorted
}

/// Strategy for inputs inside the algorithm's numeric domain.
pub fn input_strategy(algorithm: Algorithm) -> BoxedStrategy<Vec<i64>> {
    let values = if algorithm == Algorithm::Radix {
        (0i64..1_000).boxed()
    } else {
        (-100i64..100).boxed()
    };
    proptest::collection::vec(values, 0..40).boxed()
}

/// Assert every structural invariant a trace must satisfy for `input`.
pub fn assert_trace_invariants(algorithm: Algorithm, input: &[i64], trace: &Trace) {
    let (steps, highlights, messages) = trace.clone().into_parts();
    assert_eq!(steps.len(), highlights.len(), "{algorithm}: steps vs highlights");
    assert_eq!(steps.len(), messages.len(), "{algorithm}: steps vs messages");
    assert_eq!(
        trace.final_state(),
        reference_sort(input).as_slice(),
        "{algorithm}: final state is not sorted for {input:?}"
    );

    if input.is_empty() {
        assert_eq!(trace.len(), 1, "{algorithm}: empty input trace length");
        assert_eq!(messages[0], "Empty array. Nothing to sort.");
        return;
    }

    assert_eq!(steps[0], input, "{algorithm}: first step must be the input");
    assert!(highlights[0].is_empty());
    assert_eq!(messages[0], "Initial array");

    let last = trace.last();
    assert_eq!(last.operation, Operation::Complete);
    assert!(last.message.ends_with("completed"), "{algorithm}: {}", last.message);
    assert!(last.highlights.is_empty());

    for entry in trace {
        for &idx in &entry.highlights {
            assert!(
                idx < entry.step.len(),
                "{algorithm}: highlight {idx} out of range in {:?}",
                entry.message
            );
        }
    }
}
