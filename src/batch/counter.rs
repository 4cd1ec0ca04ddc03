use std::sync::atomic::{AtomicUsize, Ordering};

/// Articles whose season extraction degraded to nothing, shared by every
/// batch that reports into it.
#[derive(Debug, Default)]
pub struct FailureCounter {
    failed: AtomicUsize,
}

impl FailureCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one failed article and returns the new total.
    pub fn record(&self) -> usize {
        self.failed.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }
}
