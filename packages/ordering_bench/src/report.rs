//! Console and CSV rendering of experiment results.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::{BenchmarkConfig, Error, RunResult};

/// File name the results are written to unless another path is requested.
pub const DEFAULT_OUTPUT_PATH: &str = "results.csv";

/// First line of every results CSV.
pub const CSV_HEADER: &str = "MemoryOrder,CounterValue,DurationMs";

const TABLE_SEPARATOR: &str = "------------------------------------";

/// Writes the configuration summary and a fixed-width results table.
///
/// Rows appear in the order given, which for an experiment is the order the runs executed in.
pub fn write_table(
    out: &mut impl Write,
    config: &BenchmarkConfig,
    results: &[RunResult],
) -> io::Result<()> {
    writeln!(out, "Configuration:")?;
    writeln!(out, "Threads: {}", config.thread_count())?;
    writeln!(out, "Increments/thread: {}", config.increments_per_thread())?;
    writeln!(out)?;

    writeln!(out, "{:<12} {:<12} {}", "Memory Order", "Counter", "Time (ms)")?;
    writeln!(out, "{TABLE_SEPARATOR}")?;

    for result in results {
        writeln!(
            out,
            "{:<12} {:<12} {}",
            result.ordering_name(),
            result.observed_counter(),
            result.duration_ms()
        )?;
    }

    Ok(())
}

/// Writes the table produced by [`write_table()`] to standard output.
///
/// # Errors
///
/// Returns [`Error::Console`] if standard output cannot be written.
pub fn print_table(config: &BenchmarkConfig, results: &[RunResult]) -> Result<()> {
    let mut stdout = io::stdout().lock();

    write_table(&mut stdout, config, results)
        .and_then(|()| stdout.flush())
        .map_err(Error::Console)
}

/// Writes the CSV header followed by one row per result.
pub fn write_csv(out: &mut impl Write, results: &[RunResult]) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;

    for result in results {
        writeln!(
            out,
            "{},{},{}",
            result.ordering_name(),
            result.observed_counter(),
            result.duration_ms()
        )?;
    }

    Ok(())
}

/// Creates (or truncates) the file at `path` and writes the results to it as CSV.
///
/// # Errors
///
/// Returns [`Error::OpenOutput`] if the file cannot be opened for writing and
/// [`Error::WriteOutput`] if writing or flushing it fails.
pub fn write_csv_file(path: &Path, results: &[RunResult]) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::OpenOutput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);

    write_csv(&mut writer, results)
        .and_then(|()| writer.flush())
        .map_err(|source| Error::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}
