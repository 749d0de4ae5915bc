use tracing::info;

use crate::{BenchmarkConfig, OrderingPolicy, RunResult, run_benchmark};

/// Executes one benchmark run per ordering policy, in the order of [`OrderingPolicy::ALL`].
///
/// The runs are strictly sequential, so the workers of one run never compete with those of
/// another. The results are returned in execution order.
#[must_use]
pub fn run_experiment(config: &BenchmarkConfig) -> [RunResult; OrderingPolicy::COUNT] {
    info!(
        thread_count = config.thread_count(),
        increments_per_thread = config.increments_per_thread(),
        "running experiment over {} memory orderings",
        OrderingPolicy::COUNT
    );

    OrderingPolicy::ALL.map(|policy| run_benchmark(config, policy))
}
