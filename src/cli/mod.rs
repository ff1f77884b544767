//! Command-line driver: builds an input, runs algorithms, prints traces.

pub mod format;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::algorithms::{Algorithm, SortOptions};
use crate::config::Config;
use crate::replay::ReplaySession;
use crate::trace::Trace;
use crate::util::{parse_sequence, random_sequence};

#[derive(Parser, Debug)]
#[command(
    name = "sortrace",
    version,
    about = "Record and replay every step of classic sorting algorithms"
)]
pub struct Cli {
    /// Override the data directory (defaults to ~/.sortrace)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available algorithms
    List,
    /// Run one algorithm and print its trace
    Run {
        algorithm: Algorithm,
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run every algorithm concurrently on the same input
    All {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Step through a trace frame by frame
    Replay {
        algorithm: Algorithm,
        #[command(flatten)]
        input: InputArgs,
        /// Delay between frames in milliseconds (config default: 500)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Comma separated values to sort, e.g. "5,3,1"
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["size", "seed"])]
    pub values: Option<String>,
    /// Number of random values to generate
    #[arg(long)]
    pub size: Option<usize>,
    /// Seed for reproducible random input
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per recorded step
    Text,
    /// The full trace as JSON
    Json,
    /// A single summary line
    Summary,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    algorithm: Algorithm,
    input: &'a [i64],
    trace: &'a Trace,
}

/// Build the input sequence from explicit values or a random sample.
pub fn resolve_input(args: &InputArgs, config: &Config) -> Result<Vec<i64>> {
    if let Some(values) = &args.values {
        return parse_sequence(values).context("Failed to parse --values");
    }
    let size = args.size.unwrap_or(config.sample.size);
    random_sequence(size, config.sample.min, config.sample.max, args.seed)
        .context("Failed to generate sample input")
}

/// Execute a parsed command, writing all output to `out`.
pub async fn run(command: Command, config: &Config, out: &mut impl Write) -> Result<()> {
    let options = config.sort_options();
    match command {
        Command::List => {
            for algorithm in Algorithm::ALL {
                writeln!(out, "{:<10} {}", algorithm.as_str(), algorithm.display_name())?;
            }
        }
        Command::Run {
            algorithm,
            input,
            format,
        } => {
            let input = resolve_input(&input, config)?;
            let trace = algorithm
                .sort_with(&input, &options)
                .with_context(|| format!("{} failed", algorithm.display_name()))?;
            print_trace(algorithm, &input, &trace, format, out)?;
        }
        Command::All { input } => {
            let input = resolve_input(&input, config)?;
            writeln!(out, "Input: {:?}", input)?;
            run_all(&input, options, out).await?;
        }
        Command::Replay {
            algorithm,
            input,
            interval_ms,
        } => {
            let input = resolve_input(&input, config)?;
            let trace = algorithm
                .sort_with(&input, &options)
                .with_context(|| format!("{} failed", algorithm.display_name()))?;
            let interval = interval_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.replay_interval());
            replay(trace, interval, out).await?;
        }
    }
    Ok(())
}

fn print_trace(
    algorithm: Algorithm,
    input: &[i64],
    trace: &Trace,
    output_format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match output_format {
        OutputFormat::Text => {
            writeln!(out, "{}", algorithm.display_name())?;
            for (position, entry) in trace.iter().enumerate() {
                writeln!(out, "{}", format::frame(position, trace.len(), entry))?;
            }
        }
        OutputFormat::Json => {
            let output = RunOutput {
                algorithm,
                input,
                trace,
            };
            let json = serde_json::to_string_pretty(&output).context("Failed to encode trace")?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Summary => {
            writeln!(out, "{}", format::summary_line(algorithm, trace))?;
        }
    }
    Ok(())
}

/// Run all ten algorithms on blocking tasks, each over its own copy of the
/// input, and print their summaries in canonical order.
async fn run_all(input: &[i64], options: SortOptions, out: &mut impl Write) -> Result<()> {
    let handles: Vec<_> = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let input = input.to_vec();
            let handle =
                tokio::task::spawn_blocking(move || algorithm.sort_with(&input, &options));
            (algorithm, handle)
        })
        .collect();

    for (algorithm, handle) in handles {
        let result = handle
            .await
            .with_context(|| format!("{} task failed", algorithm.display_name()))?;
        match result {
            Ok(trace) => writeln!(out, "{}", format::summary_line(algorithm, &trace))?,
            Err(e) => {
                tracing::warn!(
                    algorithm = %algorithm.as_str(),
                    error = %e,
                    "Algorithm rejected input"
                );
                writeln!(out, "{:<22} error: {}", algorithm.display_name(), e)?;
            }
        }
    }
    Ok(())
}

/// Play a trace to the end, one frame per interval.
async fn replay(trace: Trace, interval: Duration, out: &mut impl Write) -> Result<()> {
    let mut session = ReplaySession::new(trace);
    let total = session.len();
    writeln!(out, "{}", format::frame(0, total, session.current()))?;

    let mut ticker = (!interval.is_zero()).then(|| tokio::time::interval(interval));
    if let Some(ticker) = ticker.as_mut() {
        // the first tick completes immediately
        ticker.tick().await;
    }

    session.play();
    loop {
        if let Some(ticker) = ticker.as_mut() {
            ticker.tick().await;
        }
        let position = session.position() + 1;
        let Some(entry) = session.tick() else {
            break;
        };
        writeln!(out, "{}", format::frame(position, total, entry))?;
        out.flush()?;
    }
    Ok(())
}
