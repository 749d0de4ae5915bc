//! Runs a small experiment and prints how long each memory ordering took.
//!
//! This example showcases how to use `ordering_bench` as a library, without the CSV output of
//! the binary.

#![allow(missing_docs, reason = "No need for API documentation in example code")]

use std::io;

use ordering_bench::{BenchmarkConfig, run_experiment, write_table};

const THREAD_COUNT: usize = 4;
const INCREMENTS_PER_THREAD: u64 = 100_000;

fn main() {
    println!("ordering_bench Basic Usage Example");
    println!("==================================");
    println!();

    let config = BenchmarkConfig::new(THREAD_COUNT, INCREMENTS_PER_THREAD);
    let results = run_experiment(&config);

    write_table(&mut io::stdout(), &config, &results).unwrap();

    println!();

    let fastest = results
        .iter()
        .min_by_key(|result| result.duration())
        .expect("an experiment always produces one result per ordering");

    println!(
        "Fastest ordering: {} ({:?})",
        fastest.ordering_name(),
        fastest.duration()
    );
}
