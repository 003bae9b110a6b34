use std::sync::atomic::{AtomicU64, Ordering};

/// Aggregate processing counters shared by every worker.
///
/// Each counter is updated with its own `fetch_add` and read with its own
/// `load`; there is no group atomicity. Counters only ever increase.
#[derive(Debug, Default)]
pub struct ProcessingCounters {
    processed: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
    total_time_ms: AtomicU64,
}

/// Plain copy of the counters at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub processed: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub total_time_ms: u64,
}

impl ProcessingCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one published result: processed, then outcome, then time.
    pub fn record(&self, success: bool, elapsed_ms: u64) {
        self.processed.fetch_add(1, Ordering::Relaxed);
        if success {
            self.succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
        self.total_time_ms.fetch_add(elapsed_ms, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            processed: self.processed.load(Ordering::Relaxed),
            succeeded: self.succeeded.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            total_time_ms: self.total_time_ms.load(Ordering::Relaxed),
        }
    }
}
