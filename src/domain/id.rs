use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of unique application identifiers.
///
/// `next` is the only mutation path; identifiers are strictly increasing
/// within a process. Seed with [`IdGenerator::starting_after`] at startup so
/// a restarted process never re-issues an id that is already on disk.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first `next` returns 1.
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// Creates a generator whose first `next` returns `last + 1`.
    pub fn starting_after(last: u64) -> Self {
        Self {
            counter: AtomicU64::new(last),
        }
    }

    /// Atomically increments the counter and returns the new value.
    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}
