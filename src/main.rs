use anyhow::{Context, Result};
use clap::Parser;
use sortrace::cli::{self, Cli};
use sortrace::{util, Config};
use std::fs::{self, OpenOptions};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    util::init_data_dir(args.data_dir.clone());

    // Initialize logging to file (~/.sortrace/logs/sortrace.log)
    fs::create_dir_all(util::logs_dir()).context("Failed to create logs directory")?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = Config::load();
    tracing::debug!(?config, "Loaded configuration");

    let mut stdout = io::stdout().lock();
    cli::run(args.command, &config, &mut stdout).await
}
