use std::sync::atomic::AtomicU64;

use crate::OrderingPolicy;

/// Increments `counter` by one, `repeat` times, using the add ordering of `policy`.
///
/// This is the body of every worker thread in a benchmark run. It never reads the counter and
/// never blocks, so the final total depends only on the adds themselves.
pub fn increment(counter: &AtomicU64, repeat: u64, policy: OrderingPolicy) {
    let ordering = policy.add_ordering();

    for _ in 0..repeat {
        counter.fetch_add(1, ordering);
    }
}
