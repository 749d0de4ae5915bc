use std::sync::atomic::AtomicU64;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::{BenchmarkConfig, OrderingPolicy, increment};

/// The outcome of one benchmark run: what the counter ended up at and how long it took.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunResult {
    policy: OrderingPolicy,
    observed_counter: u64,
    duration: Duration,
}

impl RunResult {
    /// Creates a result for a run that used `policy`.
    #[must_use]
    pub const fn new(policy: OrderingPolicy, observed_counter: u64, duration: Duration) -> Self {
        Self {
            policy,
            observed_counter,
            duration,
        }
    }

    /// The ordering policy the run used.
    #[must_use]
    pub const fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    /// The name of the ordering policy, as shown in reports.
    #[must_use]
    pub const fn ordering_name(&self) -> &'static str {
        self.policy.name()
    }

    /// The counter value read after all workers were joined.
    #[must_use]
    pub const fn observed_counter(&self) -> u64 {
        self.observed_counter
    }

    /// Wall-clock time from before the first worker was launched until the last one was joined.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// [`duration()`][Self::duration] in whole milliseconds, truncated.
    #[must_use]
    pub const fn duration_ms(&self) -> u128 {
        self.duration.as_millis()
    }
}

/// Executes one benchmark run: `config.thread_count()` workers concurrently increment a fresh
/// counter under `policy`, after which the counter is read back.
///
/// The counter is read only after every worker has been joined, using the load ordering of
/// `policy`. Because each increment is an atomic read-modify-write, the observed value is
/// always `thread_count * increments_per_thread` (wrapping on `u64` overflow) regardless of
/// the policy. Only the duration is expected to vary.
///
/// # Panics
///
/// Panics if a worker thread cannot be spawned or if a worker panics.
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig, policy: OrderingPolicy) -> RunResult {
    let counter = AtomicU64::new(0);
    let increments_per_thread = config.increments_per_thread();

    debug!(
        %policy,
        thread_count = config.thread_count(),
        increments_per_thread,
        "starting benchmark run"
    );

    let start = Instant::now();

    // The scope joins every worker before returning.
    thread::scope(|s| {
        for _ in 0..config.thread_count() {
            s.spawn(|| increment(&counter, increments_per_thread, policy));
        }
    });

    let duration = start.elapsed();

    let observed_counter = counter.load(policy.load_ordering());

    debug!(%policy, observed_counter, ?duration, "benchmark run completed");

    RunResult::new(policy, observed_counter, duration)
}
