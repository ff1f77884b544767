use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::algorithms::{SortOptions, DEFAULT_MAX_COUNTING_RANGE};
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Random sample generation
    pub sample: SampleConfig,
    /// Terminal replay
    pub replay: ReplayConfig,
    /// Counting sort domain limit
    pub counting: CountingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleConfig {
    pub size: usize,
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlSampleConfig {
    pub size: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Delay between frames in milliseconds
    pub interval_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlReplayConfig {
    pub interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingConfig {
    /// Largest `max - min + 1` counting sort accepts
    pub max_range: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlCountingConfig {
    pub max_range: Option<usize>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub sample: Option<TomlSampleConfig>,
    pub replay: Option<TomlReplayConfig>,
    pub counting: Option<TomlCountingConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample: SampleConfig {
                size: 20,
                min: 1,
                max: 100,
            },
            replay: ReplayConfig { interval_ms: 500 },
            counting: CountingConfig {
                max_range: DEFAULT_MAX_COUNTING_RANGE,
            },
        }
    }
}

impl Config {
    /// Load configuration from ~/.sortrace/config.toml, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from a specific file, merging with defaults.
    ///
    /// A missing or malformed file leaves the defaults in place.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No config file loaded");
                return Self::default();
            }
        };

        match Self::from_toml_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to parse config file, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse TOML text and merge it over the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config = toml::from_str::<TomlConfig>(contents)?;
        let mut config = Config::default();

        if let Some(sample) = toml_config.sample {
            if let Some(size) = sample.size {
                config.sample.size = size;
            }
            if let Some(min) = sample.min {
                config.sample.min = min;
            }
            if let Some(max) = sample.max {
                config.sample.max = max;
            }
        }

        if let Some(replay) = toml_config.replay {
            if let Some(interval_ms) = replay.interval_ms {
                config.replay.interval_ms = interval_ms;
            }
        }

        if let Some(counting) = toml_config.counting {
            if let Some(max_range) = counting.max_range {
                config.counting.max_range = max_range;
            }
        }

        Ok(config)
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    /// Options handed to the algorithm dispatcher.
    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            max_counting_range: self.counting.max_range,
        }
    }

    pub fn replay_interval(&self) -> Duration {
        Duration::from_millis(self.replay.interval_ms)
    }

    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample.size = size;
        self
    }
}
