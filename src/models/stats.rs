use serde::{Deserialize, Serialize};

/// Point-in-time view of the dispatcher's aggregate counters.
///
/// Recomputed from the live counters on every request. Counters are read one at
/// a time, so `total_processed` may briefly run ahead of
/// `success_count + error_count` while a worker is mid-update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub total_processed: u64,
    pub success_count: u64,
    pub error_count: u64,
    pub average_process_time_ms: f64,
    pub active_workers: usize,
    pub queue_length: usize,
    pub uptime_seconds: u64,
}

impl ProcessingStats {
    /// Mean processing time, defined as zero before anything has been processed
    pub fn average(total_time_ms: u64, processed: u64) -> f64 {
        if processed == 0 {
            0.0
        } else {
            total_time_ms as f64 / processed as f64
        }
    }

    /// Fraction of processed orders that failed, zero when nothing was processed
    pub fn error_rate(&self) -> f64 {
        if self.total_processed == 0 {
            0.0
        } else {
            self.error_count as f64 / self.total_processed as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_handles_zero_processed() {
        assert_eq!(ProcessingStats::average(0, 0), 0.0);
        assert_eq!(ProcessingStats::average(90, 3), 30.0);
    }

    #[test]
    fn test_serialized_field_names() {
        let stats = ProcessingStats {
            total_processed: 4,
            success_count: 3,
            error_count: 1,
            average_process_time_ms: 12.5,
            active_workers: 2,
            queue_length: 0,
            uptime_seconds: 9,
        };
        assert_eq!(stats.error_rate(), 0.25);

        let value = serde_json::to_value(&stats).unwrap();
        for key in [
            "total_processed",
            "success_count",
            "error_count",
            "average_process_time_ms",
            "active_workers",
            "queue_length",
            "uptime_seconds",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
