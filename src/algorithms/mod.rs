//! Trace-emitting sorting algorithms.
//!
//! Every algorithm copies its input, sorts the copy, and records each
//! comparison, swap and write into a [`Trace`]. The input slice is never
//! touched. Counting and radix sort have restricted domains and return a
//! [`SortError`] instead of guessing.

pub mod bubble;
pub mod cocktail;
pub mod counting;
pub mod error;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::trace::Trace;

pub use bubble::bubble_sort;
pub use cocktail::cocktail_shaker_sort;
pub use counting::{counting_sort, counting_sort_with};
pub use error::SortError;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;
pub use shell::shell_sort;

/// Default ceiling on the number of count buckets counting sort may allocate.
///
/// Each prefix-sum step snapshots the whole count array, so the trace grows
/// with the square of this value (about 8 MB of snapshots at 1 000).
pub const DEFAULT_MAX_COUNTING_RANGE: usize = 1_000;

/// Knobs for the bounded-domain algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    /// Largest `max - min + 1` counting sort accepts
    pub max_counting_range: usize,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            max_counting_range: DEFAULT_MAX_COUNTING_RANGE,
        }
    }
}

/// The ten instrumented algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Selection,
    Bubble,
    Insertion,
    Heap,
    Quick,
    Merge,
    Shell,
    Counting,
    Radix,
    Cocktail,
}

impl Algorithm {
    /// All algorithms in canonical order
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Shell,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Cocktail,
    ];

    /// Short identifier used on the command line and in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Heap => "heap",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Shell => "shell",
            Algorithm::Counting => "counting",
            Algorithm::Radix => "radix",
            Algorithm::Cocktail => "cocktail",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Selection => selection::NAME,
            Algorithm::Bubble => bubble::NAME,
            Algorithm::Insertion => insertion::NAME,
            Algorithm::Heap => heap::NAME,
            Algorithm::Quick => quick::NAME,
            Algorithm::Merge => merge::NAME,
            Algorithm::Shell => shell::NAME,
            Algorithm::Counting => counting::NAME,
            Algorithm::Radix => radix::NAME,
            Algorithm::Cocktail => cocktail::NAME,
        }
    }

    /// Whether the algorithm can reject inputs outside its numeric domain
    pub fn is_bounded(&self) -> bool {
        matches!(self, Algorithm::Counting | Algorithm::Radix)
    }

    /// Run with default options.
    pub fn sort(&self, input: &[i64]) -> Result<Trace, SortError> {
        self.sort_with(input, &SortOptions::default())
    }

    /// Run the algorithm over a private copy of `input`.
    pub fn sort_with(&self, input: &[i64], options: &SortOptions) -> Result<Trace, SortError> {
        let result = match self {
            Algorithm::Selection => Ok(selection_sort(input)),
            Algorithm::Bubble => Ok(bubble_sort(input)),
            Algorithm::Insertion => Ok(insertion_sort(input)),
            Algorithm::Heap => Ok(heap_sort(input)),
            Algorithm::Quick => Ok(quick_sort(input)),
            Algorithm::Merge => Ok(merge_sort(input)),
            Algorithm::Shell => Ok(shell_sort(input)),
            Algorithm::Counting => counting_sort_with(input, options),
            Algorithm::Radix => radix_sort(input),
            Algorithm::Cocktail => Ok(cocktail_shaker_sort(input)),
        };

        match &result {
            Ok(trace) => tracing::debug!(
                algorithm = %self.as_str(),
                input_len = input.len(),
                steps = trace.len(),
                "Recorded sort trace"
            ),
            Err(e) => tracing::debug!(
                algorithm = %self.as_str(),
                input_len = input.len(),
                error = %e,
                "Input outside algorithm domain"
            ),
        }

        result
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts slugs case-insensitively, with or without a `-sort` /
    /// `_sort` / ` sort` suffix ("bubble", "Bubble Sort", "heap_sort").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        let key = normalized.strip_suffix("-sort").unwrap_or(&normalized);
        match key {
            "selection" => Ok(Algorithm::Selection),
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "heap" => Ok(Algorithm::Heap),
            "quick" => Ok(Algorithm::Quick),
            "merge" => Ok(Algorithm::Merge),
            "shell" => Ok(Algorithm::Shell),
            "counting" => Ok(Algorithm::Counting),
            "radix" => Ok(Algorithm::Radix),
            "cocktail" | "cocktail-shaker" | "shaker" => Ok(Algorithm::Cocktail),
            _ => Err(SortError::UnknownAlgorithm(s.to_string())),
        }
    }
}
