#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Measures how atomic memory orderings affect a concurrently incremented counter.
//!
//! An experiment runs the same workload once per [`OrderingPolicy`]: a fixed number of threads
//! each increment a fresh shared [`AtomicU64`][std::sync::atomic::AtomicU64] a fixed number of
//! times, after which the counter is read back and the elapsed wall-clock time recorded.
//!
//! The core functionality includes:
//! - [`OrderingPolicy`] - The five memory orderings under test and their add/load orderings
//! - [`BenchmarkConfig`] - The workload shared by every run of an experiment
//! - [`run_benchmark()`] - One run under one policy, producing a [`RunResult`]
//! - [`run_experiment()`] - One run per policy, in a fixed order
//! - [`write_table()`] and [`write_csv()`] - Reporting of results
//!
//! Because every increment is an atomic read-modify-write, the observed counter is the same for
//! every policy. Only the duration is expected to differ, and even that may be within noise.
//! There is no warm-up or repetition, so the numbers are indicative, not statistically rigorous.
//! For repeatable measurements of the same code path, see the Criterion benchmark in `benches/`.
//!
//! # Example
//!
//! ```
//! use ordering_bench::{BenchmarkConfig, OrderingPolicy, run_experiment};
//!
//! let config = BenchmarkConfig::new(4, 1000);
//! let results = run_experiment(&config);
//!
//! assert_eq!(results.len(), OrderingPolicy::COUNT);
//!
//! for result in results {
//!     assert_eq!(result.observed_counter(), 4000);
//!     println!("{}: {:?}", result.ordering_name(), result.duration());
//! }
//! ```
//!
//! The binary entry point is in `main.rs`.

mod config;
mod error;
mod experiment;
mod policy;
mod report;
mod run;
mod worker;

pub use config::*;
pub use error::Error;
pub use experiment::*;
pub use policy::*;
pub use report::*;
pub use run::*;
pub use worker::*;
