// File: crates/ascii-chart-cli/src/main.rs
// Summary: Parses comma-separated prices and timestamps from the command line and prints the chart.

mod input;

use std::process::ExitCode;

use anyhow::{Context, Result};
use ascii_chart_core::{Chart, RenderOptions, Series};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ascii-plot", author, version, about, long_about = None)]
struct Args {
    /// Comma-separated prices, e.g. "101.5,102,101.75"
    #[arg(allow_hyphen_values = true)]
    prices_csv: String,

    /// Comma-separated timestamps, one per price, e.g. "2024-01-01 09:30:00,..."
    #[arg(allow_hyphen_values = true)]
    times_csv: String,

    /// Chart width in characters
    #[arg(long, env = "ASCII_CHART_WIDTH", default_value_t = ascii_chart_core::types::WIDTH)]
    width: usize,

    /// Plot height in rows (a label row is added below)
    #[arg(long, env = "ASCII_CHART_HEIGHT", default_value_t = ascii_chart_core::types::HEIGHT)]
    height: usize,
}

fn init_logging() {
    // Logs go to stderr so stdout carries only the chart.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", Args::command().render_usage());
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    match run(&args) {
        Ok(chart) => {
            println!("{chart}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let opts = RenderOptions::new(args.width, args.height);
    opts.validate().context("invalid chart size")?;

    let prices = input::parse_prices(&args.prices_csv)
        .context("could not parse prices; ensure every price is a number")?;
    let times = input::parse_times(&args.times_csv)?;
    debug!(prices = prices.len(), times = times.len(), "parsed input");
    if prices.len() != times.len() {
        warn!(prices = prices.len(), times = times.len(), "price and timestamp counts differ");
    }

    let chart = Chart::new(Series::new(prices).with_labels(times));
    Ok(chart.render_to_string(&opts))
}
