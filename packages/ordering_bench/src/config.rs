/// The workload shared by every run of an experiment.
///
/// A single configuration is resolved once and reused for all ordering policies, so the runs of
/// one experiment are comparable with each other.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BenchmarkConfig {
    thread_count: usize,
    increments_per_thread: u64,
}

impl BenchmarkConfig {
    /// Thread count used when no explicit configuration is given.
    pub const DEFAULT_THREAD_COUNT: usize = 4;

    /// Increments per thread used when no explicit configuration is given.
    pub const DEFAULT_INCREMENTS_PER_THREAD: u64 = 1_000_000;

    /// Creates a configuration with the given thread count and per-thread increment count.
    ///
    /// A thread count of zero is accepted and yields runs that spawn no workers.
    #[must_use]
    pub const fn new(thread_count: usize, increments_per_thread: u64) -> Self {
        Self {
            thread_count,
            increments_per_thread,
        }
    }

    /// Resolves a configuration from optional command-line values.
    ///
    /// Returns `None` unless both values are present, in which case the caller is expected to
    /// fall back to [`BenchmarkConfig::default()`].
    #[must_use]
    pub fn from_flags(
        thread_count: Option<usize>,
        increments_per_thread: Option<u64>,
    ) -> Option<Self> {
        Some(Self::new(thread_count?, increments_per_thread?))
    }

    /// How many worker threads each run launches.
    #[must_use]
    pub const fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// How many times each worker increments the shared counter.
    #[must_use]
    pub const fn increments_per_thread(&self) -> u64 {
        self.increments_per_thread
    }

    /// The counter value every run is expected to observe.
    ///
    /// Returns `None` if the product does not fit in a `u64`, in which case the counter wraps.
    #[must_use]
    pub fn expected_total(&self) -> Option<u64> {
        u64::try_from(self.thread_count)
            .ok()?
            .checked_mul(self.increments_per_thread)
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_THREAD_COUNT,
            Self::DEFAULT_INCREMENTS_PER_THREAD,
        )
    }
}
