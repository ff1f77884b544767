//! Cursor-based playback over an already recorded trace.
//!
//! A [`ReplaySession`] never re-runs an algorithm: it only moves a position
//! over a shared [`Trace`]. Timing is the caller's business; a renderer calls
//! [`ReplaySession::tick`] at whatever cadence it likes.

use std::sync::Arc;

use crate::trace::{Trace, TraceEntry};

/// Playback state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Not advancing on ticks
    #[default]
    Paused,
    /// Advancing one entry per tick
    Playing,
    /// Reached the last entry while playing
    Finished,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }
}

/// One playback cursor over a trace
#[derive(Debug, Clone)]
pub struct ReplaySession {
    trace: Arc<Trace>,
    position: usize,
    state: PlaybackState,
}

impl ReplaySession {
    /// Start paused on the first entry.
    pub fn new(trace: impl Into<Arc<Trace>>) -> Self {
        Self {
            trace: trace.into(),
            position: 0,
            state: PlaybackState::Paused,
        }
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of entries in the underlying trace.
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Entry under the cursor.
    pub fn current(&self) -> &TraceEntry {
        // position is always clamped to the trace bounds
        &self.trace.entries()[self.position]
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    /// Start advancing on ticks. A session already at the end finishes
    /// immediately.
    pub fn play(&mut self) {
        self.state = if self.is_at_end() {
            PlaybackState::Finished
        } else {
            PlaybackState::Playing
        };
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Paused;
    }

    /// Switch between playing and paused.
    pub fn toggle(&mut self) {
        if self.state.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Move one entry forward. Returns false at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        if self.is_at_end() && self.state.is_playing() {
            self.state = PlaybackState::Finished;
        }
        true
    }

    /// Move one entry back. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.position -= 1;
        if self.state == PlaybackState::Finished {
            self.state = PlaybackState::Paused;
        }
        true
    }

    /// Timer hook: when playing, advance one entry and return it.
    pub fn tick(&mut self) -> Option<&TraceEntry> {
        if !self.state.is_playing() {
            return None;
        }
        if !self.step_forward() {
            self.state = PlaybackState::Finished;
            return None;
        }
        Some(self.current())
    }

    /// Jump to `position`, clamped to the last entry.
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.trace.len().saturating_sub(1));
        if self.state == PlaybackState::Finished && !self.is_at_end() {
            self.state = PlaybackState::Paused;
        }
    }

    /// Back to the first entry, paused.
    pub fn rewind(&mut self) {
        self.position = 0;
        self.state = PlaybackState::Paused;
    }
}
