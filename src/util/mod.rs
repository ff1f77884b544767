//! Utility modules

pub mod paths;
pub mod sample;

pub use paths::{config_path, data_dir, init_data_dir, log_file_path, logs_dir};
pub use sample::{parse_sequence, random_sequence, InputError};
