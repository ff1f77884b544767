mod settings;

pub use settings::{Config, CountingConfig, ReplayConfig, SampleConfig, EXAMPLE_CONFIG};
