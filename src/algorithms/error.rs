//! Errors raised by the bounded-domain algorithms

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("Radix sort requires non-negative values, found {value} at index {index}")]
    NegativeValue { index: usize, value: i64 },
    #[error(
        "Value range {min}..={max} needs {span} count buckets, more than the limit of {limit}"
    )]
    RangeTooLarge {
        min: i64,
        max: i64,
        span: u128,
        limit: usize,
    },
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
