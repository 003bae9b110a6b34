//! Default reader of the dispatcher's result stream.
//!
//! Drains results on a dedicated thread until the stream closes, which happens
//! once every worker has exited after [`Dispatcher::close`](crate::dispatcher::Dispatcher::close).

use crossbeam::channel::Receiver;
use std::io;
use std::thread::{self, JoinHandle};
use tracing::debug;

use crate::logging::{log_error, log_order_operation};
use crate::models::ProcessedOrder;

/// Totals observed by the result logger over its lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsumerSummary {
    pub delivered: u64,
    pub succeeded: u64,
    pub failed: u64,
}

impl ConsumerSummary {
    fn observe(&mut self, result: &ProcessedOrder) {
        self.delivered += 1;
        if result.success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Spawn a thread that logs every result and returns the totals when the
/// stream ends.
pub fn spawn_result_logger(
    results: Receiver<ProcessedOrder>,
) -> io::Result<JoinHandle<ConsumerSummary>> {
    thread::Builder::new()
        .name("order-result-logger".to_string())
        .spawn(move || drain_results(results))
}

fn drain_results(results: Receiver<ProcessedOrder>) -> ConsumerSummary {
    let mut summary = ConsumerSummary::default();

    for result in results.iter() {
        summary.observe(&result);

        if result.success {
            let details = format!("{} ({} ms)", result.message, result.processing_time_ms);
            log_order_operation(
                "complete",
                &result.order.id,
                Some(result.worker_id),
                result.order.status.as_str(),
                Some(details.as_str()),
            );
        } else {
            let context = format!("order {} on worker {}", result.order.id, result.worker_id);
            log_error(
                "order_processing",
                "complete",
                result.error.as_deref().unwrap_or(result.message.as_str()),
                Some(context.as_str()),
            );
        }
    }

    debug!(
        delivered = summary.delivered,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Result stream closed"
    );
    summary
}
