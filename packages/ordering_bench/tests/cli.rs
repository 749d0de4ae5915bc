//! Integration tests for the `ordering_bench` binary.
//!
//! Every test runs the binary in its own temporary working directory so that the default
//! `results.csv` never lands in the source tree.

#![cfg(not(miri))]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use ordering_bench::{CSV_HEADER, DEFAULT_OUTPUT_PATH, OrderingPolicy};

/// Runs the binary with the given arguments in `working_dir`.
fn run_tool(working_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ordering_bench"))
        .args(args)
        .current_dir(working_dir)
        // Keep log output predictable regardless of the caller's environment.
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to execute the ordering_bench binary")
}

/// Parses the data rows of a results CSV, asserting the header along the way.
fn parse_rows(csv: &str) -> Vec<(OrderingPolicy, u64, u128)> {
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));

    lines
        .map(|line| {
            let fields = line.split(',').collect::<Vec<_>>();
            let [name, counter, duration_ms] = fields.as_slice() else {
                panic!("malformed row: {line}");
            };

            (
                name.parse().unwrap(),
                counter.parse().unwrap(),
                duration_ms.parse().unwrap(),
            )
        })
        .collect()
}

#[test]
fn writes_results_csv_for_explicit_configuration() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_tool(dir.path(), &["--thread", "4", "--iter", "1000"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let csv = fs::read_to_string(dir.path().join(DEFAULT_OUTPUT_PATH)).unwrap();
    assert_eq!(csv.lines().count(), 6);

    let rows = parse_rows(&csv);
    let policies = rows.iter().map(|(policy, _, _)| *policy).collect::<Vec<_>>();
    assert_eq!(policies, OrderingPolicy::ALL);

    for (policy, counter, _duration_ms) in rows {
        assert_eq!(counter, 4000, "{policy:?}");
    }
}

#[test]
fn prints_configuration_and_table() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_tool(dir.path(), &["--thread", "2", "--iter", "50"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Threads: 2"), "{stdout}");
    assert!(stdout.contains("Increments/thread: 50"), "{stdout}");
    assert!(stdout.contains("Memory Order"), "{stdout}");

    for policy in OrderingPolicy::ALL {
        let row = stdout
            .lines()
            .find(|line| line.starts_with(policy.name()))
            .unwrap_or_else(|| panic!("no row for {policy:?} in {stdout}"));

        assert_eq!(row.split_whitespace().nth(1), Some("100"), "{row}");
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("results written to results.csv"), "{stderr}");
}

#[test]
fn custom_output_path_is_honored() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_tool(
        dir.path(),
        &["--thread", "1", "--iter", "10", "--output", "custom.csv"],
    );
    assert!(output.status.success());

    assert!(dir.path().join("custom.csv").exists());
    assert!(!dir.path().join(DEFAULT_OUTPUT_PATH).exists());
}

#[test]
fn zero_threads_completes_with_zero_counters() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_tool(dir.path(), &["--thread", "0", "--iter", "1000"]);
    assert!(output.status.success());

    let csv = fs::read_to_string(dir.path().join(DEFAULT_OUTPUT_PATH)).unwrap();

    for (policy, counter, _duration_ms) in parse_rows(&csv) {
        assert_eq!(counter, 0, "{policy:?}");
    }
}

#[test]
fn unwritable_output_path_exits_with_code_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such_dir").join("results.csv");

    let output = run_tool(
        dir.path(),
        &["--thread", "2", "--iter", "10", "--output", missing.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not open"), "{stderr}");

    // The table is only printed once the results have been persisted.
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Memory Order"));
}

#[test]
fn missing_iter_falls_back_to_defaults_with_warning() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_tool(dir.path(), &["--thread", "2"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("using default values"), "{stderr}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Threads: 4"), "{stdout}");
    assert!(stdout.contains("Increments/thread: 1000000"), "{stdout}");

    let csv = fs::read_to_string(dir.path().join(DEFAULT_OUTPUT_PATH)).unwrap();
    for (policy, counter, _duration_ms) in parse_rows(&csv) {
        assert_eq!(counter, 4_000_000, "{policy:?}");
    }
}

#[test]
fn non_numeric_thread_count_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_tool(dir.path(), &["--thread", "many", "--iter", "10"]);

    assert!(!output.status.success());
    assert!(!dir.path().join(DEFAULT_OUTPUT_PATH).exists());
}
