#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the ordering benchmark.
//!
//! This module is excluded from mutation testing because testing process entry/exit behavior
//! is impractical - it requires spawning subprocesses and checking exit codes. The integration
//! tests in `tests/cli.rs` cover it end to end.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use ordering_bench::{
    BenchmarkConfig, DEFAULT_OUTPUT_PATH, RunResult, print_table, run_experiment, write_csv_file,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Measures how atomic memory orderings affect the cost of concurrently incrementing a shared
/// counter. Both --thread and --iter must be given, otherwise defaults are used.
#[derive(FromArgs)]
struct Args {
    /// number of worker threads in each run
    #[argh(option)]
    thread: Option<usize>,

    /// number of increments performed by each worker thread
    #[argh(option)]
    iter: Option<u64>,

    /// path of the CSV file to write the results to (default: results.csv)
    #[argh(option, default = "PathBuf::from(DEFAULT_OUTPUT_PATH)")]
    output: PathBuf,
}

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    init_logging();

    let args: Args = argh::from_env();

    let config = BenchmarkConfig::from_flags(args.thread, args.iter).unwrap_or_else(|| {
        warn!("using default values for threads and increments");
        BenchmarkConfig::default()
    });

    let results = run_experiment(&config);

    warn_on_unexpected_counters(&config, &results);

    if let Err(e) = write_csv_file(&args.output, &results) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = print_table(&config, &results) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    info!("results written to {} for plotting", args.output.display());

    ExitCode::SUCCESS
}

// Logs go to stderr so that stdout carries only the results table.
#[cfg_attr(test, mutants::skip)]
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg_attr(test, mutants::skip)]
fn warn_on_unexpected_counters(config: &BenchmarkConfig, results: &[RunResult]) {
    let Some(expected) = config.expected_total() else {
        warn!("thread count times increments overflows u64, counter values have wrapped");
        return;
    };

    for result in results {
        if result.observed_counter() != expected {
            warn!(
                policy = result.ordering_name(),
                observed = result.observed_counter(),
                expected,
                "counter does not match the number of increments performed"
            );
        }
    }
}
