//! Individual worker that drains the shared order queue.
//!
//! Every blocking point races the queue operation against the shutdown
//! signal, so a worker notices shutdown as soon as it is idle or waiting to
//! publish. Processing itself is never interrupted.

use chrono::Utc;
use crossbeam::channel::{select, Receiver, Sender};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::counters::ProcessingCounters;
use crate::models::{Order, ProcessedOrder};
use crate::processing::OrderProcessor;

/// Why a worker left its loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Shutdown signal observed
    Cancelled,
    /// Order queue closed and drained
    QueueClosed,
    /// Nobody is left to receive results
    ResultsClosed,
}

pub(crate) struct Worker {
    id: usize,
    orders: Receiver<Order>,
    results: Sender<ProcessedOrder>,
    shutdown: Receiver<()>,
    processor: Arc<dyn OrderProcessor>,
    counters: Arc<ProcessingCounters>,
}

impl Worker {
    pub(crate) fn new(
        id: usize,
        orders: Receiver<Order>,
        results: Sender<ProcessedOrder>,
        shutdown: Receiver<()>,
        processor: Arc<dyn OrderProcessor>,
        counters: Arc<ProcessingCounters>,
    ) -> Self {
        Self {
            id,
            orders,
            results,
            shutdown,
            processor,
            counters,
        }
    }

    /// Run until shutdown or until a queue closes. Consumes the worker so its
    /// queue endpoints are dropped on exit.
    pub(crate) fn run(self) -> StopReason {
        debug!(worker_id = self.id, "Worker started");

        let reason = loop {
            let order = select! {
                recv(self.shutdown) -> _ => break StopReason::Cancelled,
                recv(self.orders) -> message => match message {
                    Ok(order) => order,
                    Err(_) => break StopReason::QueueClosed,
                },
            };

            let processed = self.process(order);
            let order_id = processed.order.id.clone();
            let success = processed.success;
            let elapsed_ms = processed.processing_time_ms;

            select! {
                send(self.results, processed) -> sent => {
                    if sent.is_err() {
                        warn!(worker_id = self.id, order_id = %order_id, "Result queue closed, dropping result");
                        break StopReason::ResultsClosed;
                    }
                }
                recv(self.shutdown) -> _ => {
                    debug!(worker_id = self.id, order_id = %order_id, "Shutdown before result was published, dropping result");
                    break StopReason::Cancelled;
                }
            }

            self.counters.record(success, elapsed_ms);
        };

        info!(worker_id = self.id, reason = ?reason, "Worker stopped");
        reason
    }

    fn process(&self, order: Order) -> ProcessedOrder {
        let started = Instant::now();
        let outcome = self.processor.process(order);
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            worker_id = self.id,
            order_id = %outcome.order.id,
            success = outcome.success,
            elapsed_ms,
            "Order processed"
        );

        ProcessedOrder {
            order: outcome.order,
            processed_at: Utc::now(),
            processing_time_ms: elapsed_ms,
            worker_id: self.id,
            success: outcome.success,
            error: outcome.error,
            message: outcome.message,
        }
    }
}
