//! Where sortrace keeps its config file and logs

use std::path::PathBuf;
use std::sync::OnceLock;

const DIR_NAME: &str = ".sortrace";

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Pin the data directory for this process, falling back to `~/.sortrace`.
///
/// Only the first call wins; `main` makes it before loading config or
/// opening the log file.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(home_data_dir);
    if let Err(rejected) = DATA_DIR.set(path) {
        tracing::debug!(
            rejected = %rejected.display(),
            current = %data_dir().display(),
            "Ignoring second data directory"
        );
    }
}

fn home_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DIR_NAME),
        None => PathBuf::from(DIR_NAME),
    }
}

/// Pinned data directory, or `~/.sortrace` when nothing was pinned.
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(home_data_dir)
}

pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Append-only log written by the binary
pub fn log_file_path() -> PathBuf {
    logs_dir().join("sortrace.log")
}

/// TOML settings, created from the bundled example on first run
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
