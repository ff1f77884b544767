//! Sorting algorithms that record every comparison, swap and write as a
//! replayable trace.
//!
//! ```
//! use sortrace::{Algorithm, Operation};
//!
//! let trace = Algorithm::Bubble.sort(&[5, 3, 1]).unwrap();
//! assert_eq!(trace.first().message, "Initial array");
//! assert_eq!(trace.final_state(), &[1, 3, 5]);
//! assert_eq!(trace.count(Operation::Swap), 3);
//! ```

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod replay;
pub mod trace;
pub mod util;

pub use algorithms::{
    bubble_sort, cocktail_shaker_sort, counting_sort, counting_sort_with, heap_sort,
    insertion_sort, merge_sort, quick_sort, radix_sort, selection_sort, shell_sort, Algorithm,
    SortError, SortOptions,
};
pub use config::Config;
pub use replay::{PlaybackState, ReplaySession};
pub use trace::{Buffer, Operation, Trace, TraceEntry, TraceRecorder};
