//! Integration tests for replaying recorded traces
//!
//! A replay session walks a trace without re-running the algorithm, so
//! forward and backward stepping must reproduce the recorded entries exactly.

use std::sync::Arc;

use sortrace::{Algorithm, PlaybackState, ReplaySession};

#[test]
fn test_forward_then_backward_visits_same_entries() {
    let trace = Arc::new(Algorithm::Quick.sort(&[4, 1, 3, 9, 2]).unwrap());
    let mut session = ReplaySession::new(trace.clone());

    let mut forward = vec![session.current().clone()];
    while session.step_forward() {
        forward.push(session.current().clone());
    }
    assert_eq!(forward.as_slice(), trace.entries());

    let mut backward = vec![session.current().clone()];
    while session.step_back() {
        backward.push(session.current().clone());
    }
    backward.reverse();
    assert_eq!(backward, forward);
}

#[test]
fn test_independent_sessions_share_one_trace() {
    let trace = Arc::new(Algorithm::Shell.sort(&[5, 4, 3, 2, 1]).unwrap());
    let mut left = ReplaySession::new(trace.clone());
    let right = ReplaySession::new(trace.clone());

    left.play();
    left.tick();
    left.tick();

    assert_eq!(left.position(), 2);
    assert_eq!(right.position(), 0);
    assert_eq!(right.state(), PlaybackState::Paused);
}

#[test]
fn test_pause_mid_playback_then_resume_to_end() {
    let trace = Algorithm::Cocktail.sort(&[3, 2, 1]).unwrap();
    let last = trace.len() - 1;
    let mut session = ReplaySession::new(trace);

    session.play();
    session.tick();
    session.pause();
    assert!(session.tick().is_none());
    assert_eq!(session.position(), 1);

    session.play();
    while session.tick().is_some() {}
    assert_eq!(session.position(), last);
    assert_eq!(session.state(), PlaybackState::Finished);
    assert_eq!(session.current().step, vec![1, 2, 3]);
}

#[test]
fn test_replays_run_in_parallel_threads() {
    let input = vec![9, 2, 7, 4, 4, 0];
    let handles: Vec<_> = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let input = input.clone();
            std::thread::spawn(move || {
                let mut session = ReplaySession::new(algorithm.sort(&input).unwrap());
                session.play();
                while session.tick().is_some() {}
                session.current().step.clone()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![0, 2, 4, 4, 7, 9]);
    }
}
