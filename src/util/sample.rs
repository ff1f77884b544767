//! Input sequences for the command line: random samples and parsed lists

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid integer {value:?} at position {position}")]
    InvalidInteger { position: usize, value: String },
    #[error("Empty value range: min {min} is greater than max {max}")]
    EmptyRange { min: i64, max: i64 },
}

/// Generate `size` values uniformly from `min..=max`.
///
/// With a seed the sequence is reproducible; without one it comes from the
/// thread-local generator.
pub fn random_sequence(
    size: usize,
    min: i64,
    max: i64,
    seed: Option<u64>,
) -> Result<Vec<i64>, InputError> {
    if min > max {
        return Err(InputError::EmptyRange { min, max });
    }
    let values = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..size).map(|_| rng.random_range(min..=max)).collect()
        }
        None => {
            let mut rng = rand::rng();
            (0..size).map(|_| rng.random_range(min..=max)).collect()
        }
    };
    Ok(values)
}

/// Parse a comma and/or whitespace separated list such as `"5, 3,1 -2"`.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, InputError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(position, part)| {
            part.parse::<i64>().map_err(|_| InputError::InvalidInteger {
                position,
                value: part.to_string(),
            })
        })
        .collect()
}
