use std::fmt;
use std::str::FromStr;
use std::sync::atomic::Ordering;

/// The memory ordering semantics applied to the atomic operations of one benchmark run.
///
/// Each policy maps to a pair of orderings: one for the `fetch_add` performed by the workers
/// and one for the final `load` that reads the counter after all workers have been joined.
/// For most policies the two are the same. Store-only orderings are not valid for a load, so
/// [`Release`][Self::Release] and [`AcqRel`][Self::AcqRel] read the counter with a substitute
/// ordering (see [`load_ordering()`][Self::load_ordering]).
///
/// # Examples
///
/// ```
/// use std::sync::atomic::Ordering;
///
/// use ordering_bench::OrderingPolicy;
///
/// assert_eq!(OrderingPolicy::Release.add_ordering(), Ordering::Release);
/// assert_eq!(OrderingPolicy::Release.load_ordering(), Ordering::Relaxed);
/// assert_eq!(OrderingPolicy::Release.name(), "release");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the memory model defines exactly these orderings for read-modify-write operations"
)]
pub enum OrderingPolicy {
    /// Sequentially consistent add and load.
    SeqCst,

    /// Relaxed add and load.
    Relaxed,

    /// Acquire add and acquire load.
    Acquire,

    /// Release add. The final load is relaxed.
    Release,

    /// Acquire-release add. The final load is acquire.
    AcqRel,
}

impl OrderingPolicy {
    /// Every policy, in the order in which an experiment executes them.
    pub const ALL: [Self; 5] = [
        Self::SeqCst,
        Self::Relaxed,
        Self::Acquire,
        Self::Release,
        Self::AcqRel,
    ];

    /// The number of distinct policies.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the `(add, load)` ordering pair for this policy.
    ///
    /// This is the single place where the load substitution for store-only orderings is made.
    /// `Release` loads with `Relaxed` and `AcqRel` loads with `Acquire`: both are legal load
    /// orderings and neither affects the observed value, because the workers have been joined
    /// before the load happens.
    #[must_use]
    pub const fn orderings(self) -> (Ordering, Ordering) {
        match self {
            Self::SeqCst => (Ordering::SeqCst, Ordering::SeqCst),
            Self::Relaxed => (Ordering::Relaxed, Ordering::Relaxed),
            Self::Acquire => (Ordering::Acquire, Ordering::Acquire),
            Self::Release => (Ordering::Release, Ordering::Relaxed),
            Self::AcqRel => (Ordering::AcqRel, Ordering::Acquire),
        }
    }

    /// The ordering used by the workers for each `fetch_add` on the shared counter.
    #[must_use]
    pub const fn add_ordering(self) -> Ordering {
        self.orderings().0
    }

    /// The ordering used for the final read of the shared counter.
    ///
    /// Never `Release` or `AcqRel`, which are not valid for a load.
    #[must_use]
    pub const fn load_ordering(self) -> Ordering {
        self.orderings().1
    }

    /// The name used for this policy in console and CSV output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SeqCst => "seq_cst",
            Self::Relaxed => "relaxed",
            Self::Acquire => "acquire",
            Self::Release => "release",
            Self::AcqRel => "acq_rel",
        }
    }
}

impl fmt::Display for OrderingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so that width and alignment flags in table formatting apply.
        f.pad(self.name())
    }
}

impl FromStr for OrderingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid memory ordering: '{s}'. Valid options are: seq_cst, relaxed, acquire, release, acq_rel"
                )
            })
    }
}
