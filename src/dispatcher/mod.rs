//! # Order Dispatcher
//!
//! A fixed pool of worker threads draining a bounded order queue into a bounded
//! result queue.
//!
//! ## Lifecycle
//!
//! 1. [`Dispatcher::start`] allocates both queues and spawns every worker.
//! 2. Callers [`admit`](Dispatcher::admit) orders. Admission never blocks: a full
//!    queue is rejected immediately with [`DispatchError::QueueFull`].
//! 3. One reader drains results from the receiver handed out by
//!    [`take_results`](Dispatcher::take_results).
//! 4. [`close`](Dispatcher::close) fires the shutdown signal and joins every
//!    worker. The result queue closes once the last worker has exited, which
//!    ends the reader's iteration.
//!
//! ## Concurrency
//!
//! The hot path is lock-free: the two channels, one broadcast shutdown signal and
//! four atomic counters are the only shared state. Orders leave the queue in FIFO
//! order but complete in any order across workers; priority changes only how
//! long an order takes to process.

pub mod counters;
pub mod shutdown;
pub(crate) mod worker;

pub use counters::{CounterSnapshot, ProcessingCounters};
pub use shutdown::ShutdownSignal;
pub use worker::StopReason;

use chrono::{DateTime, Utc};
use crossbeam::channel::{self, Receiver, Sender, TrySendError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use crate::config::DispatcherConfig;
use crate::constants::system;
use crate::error::{DispatchError, Result};
use crate::models::{Order, ProcessedOrder, ProcessingStats};
use crate::processing::{OrderProcessor, SimulatedProcessor};
use worker::Worker;

/// Running pool of order workers
#[derive(Debug)]
pub struct Dispatcher {
    config: DispatcherConfig,
    orders: Sender<Order>,
    results: Mutex<Option<Receiver<ProcessedOrder>>>,
    shutdown: ShutdownSignal,
    counters: Arc<ProcessingCounters>,
    workers: Mutex<Option<Vec<JoinHandle<StopReason>>>>,
    active_workers: AtomicUsize,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

/// What [`Dispatcher::close`] observed while stopping the workers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShutdownReport {
    pub workers_stopped: usize,
    pub workers_panicked: usize,
    /// Orders still queued when the workers exited; never processed
    pub orders_abandoned: usize,
}

impl Dispatcher {
    /// Start a dispatcher running the simulated processing pipeline
    pub fn with_simulated_processing(config: DispatcherConfig) -> Result<Self> {
        let processor = SimulatedProcessor::from_config(&config);
        Self::start(config, processor)
    }

    /// Start a dispatcher with a custom processing step
    pub fn start<P>(config: DispatcherConfig, processor: P) -> Result<Self>
    where
        P: OrderProcessor + 'static,
    {
        Self::start_with_processor(config, Arc::new(processor))
    }

    #[instrument(skip(processor), fields(worker_count = config.worker_count, buffer_capacity = config.buffer_capacity))]
    pub fn start_with_processor(
        config: DispatcherConfig,
        processor: Arc<dyn OrderProcessor>,
    ) -> Result<Self> {
        config.validate()?;

        let (orders_tx, orders_rx) = channel::bounded(config.buffer_capacity);
        let (results_tx, results_rx) = channel::bounded(config.buffer_capacity);
        let shutdown = ShutdownSignal::new();
        let counters = Arc::new(ProcessingCounters::new());

        let mut handles = Vec::with_capacity(config.worker_count);
        for worker_id in 0..config.worker_count {
            let worker = Worker::new(
                worker_id,
                orders_rx.clone(),
                results_tx.clone(),
                shutdown.listener(),
                Arc::clone(&processor),
                Arc::clone(&counters),
            );

            let spawned = thread::Builder::new()
                .name(format!("{}-{worker_id}", system::WORKER_THREAD_PREFIX))
                .spawn(move || worker.run());

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    error!(worker_id, error = %e, "Failed to spawn worker, stopping pool");
                    shutdown.fire();
                    for handle in handles {
                        let _ = handle.join();
                    }
                    return Err(DispatchError::WorkerSpawn {
                        worker_id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        // Workers now own the only queue endpoints besides ours
        drop(orders_rx);
        drop(results_tx);

        info!(
            worker_count = config.worker_count,
            buffer_capacity = config.buffer_capacity,
            "Dispatcher started"
        );

        Ok(Self {
            active_workers: AtomicUsize::new(handles.len()),
            config,
            orders: orders_tx,
            results: Mutex::new(Some(results_rx)),
            shutdown,
            counters,
            workers: Mutex::new(Some(handles)),
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        })
    }

    /// Try to enqueue an order without blocking.
    ///
    /// The order must already be valid; it is not re-checked here. On rejection
    /// the order is returned inside the error and nothing is counted.
    pub fn admit(&self, order: Order) -> Result<()> {
        if self.shutdown.is_fired() {
            return Err(DispatchError::ShuttingDown {
                order: Box::new(order),
            });
        }

        match self.orders.try_send(order) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(order)) => {
                debug!(
                    order_id = %order.id,
                    capacity = self.config.buffer_capacity,
                    "Order queue full, rejecting admission"
                );
                Err(DispatchError::QueueFull {
                    capacity: self.config.buffer_capacity,
                    order: Box::new(order),
                })
            }
            Err(TrySendError::Disconnected(order)) => Err(DispatchError::ShuttingDown {
                order: Box::new(order),
            }),
        }
    }

    /// Hand out the result stream. Only the first call gets it.
    pub fn take_results(&self) -> Option<Receiver<ProcessedOrder>> {
        self.results.lock().take()
    }

    /// Read the counters without blocking or mutating anything
    pub fn stats(&self) -> ProcessingStats {
        let snapshot = self.counters.snapshot();
        ProcessingStats {
            total_processed: snapshot.processed,
            success_count: snapshot.succeeded,
            error_count: snapshot.failed,
            average_process_time_ms: ProcessingStats::average(
                snapshot.total_time_ms,
                snapshot.processed,
            ),
            active_workers: self.active_workers.load(Ordering::Relaxed),
            queue_length: self.queue_length(),
            uptime_seconds: self.started_at.elapsed().as_secs(),
        }
    }

    /// Not shutting down and the order queue still has room
    pub fn is_healthy(&self) -> bool {
        !self.shutdown.is_fired() && self.orders.len() < self.config.buffer_capacity
    }

    pub fn queue_length(&self) -> usize {
        self.orders.len()
    }

    pub fn capacity(&self) -> usize {
        self.config.buffer_capacity
    }

    pub fn worker_count(&self) -> usize {
        self.config.worker_count
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at_utc
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.is_fired()
    }

    /// Stop every worker, then let the queues close.
    ///
    /// Blocks until all workers have observed the shutdown signal and exited.
    /// Orders still queued are abandoned; a result computed but not yet
    /// published is dropped. A second call returns
    /// [`DispatchError::AlreadyClosed`].
    #[instrument(skip(self))]
    pub fn close(&self) -> Result<ShutdownReport> {
        let handles = self
            .workers
            .lock()
            .take()
            .ok_or(DispatchError::AlreadyClosed)?;

        info!(
            workers = handles.len(),
            queue_length = self.queue_length(),
            "Closing dispatcher"
        );
        self.shutdown.fire();

        let mut report = ShutdownReport::default();
        for handle in handles {
            let name = handle
                .thread()
                .name()
                .unwrap_or(system::WORKER_THREAD_PREFIX)
                .to_string();
            match handle.join() {
                Ok(reason) => {
                    debug!(worker = %name, reason = ?reason, "Worker joined");
                    report.workers_stopped += 1;
                }
                Err(_) => {
                    error!(worker = %name, "Worker panicked");
                    report.workers_panicked += 1;
                }
            }
        }
        self.active_workers.store(0, Ordering::Relaxed);

        report.orders_abandoned = self.queue_length();
        if report.orders_abandoned > 0 {
            warn!(
                orders_abandoned = report.orders_abandoned,
                "Orders left unprocessed at shutdown"
            );
        }

        info!(
            workers_stopped = report.workers_stopped,
            workers_panicked = report.workers_panicked,
            "Dispatcher closed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderRequest;
    use crate::processing::ProcessingOutcome;
    use std::time::Duration;

    fn order(id: &str) -> Order {
        OrderRequest {
            id: Some(id.to_string()),
            amount: 75.0,
            items: vec!["webcam".to_string()],
            customer: "c@example.com".to_string(),
            address: "1 Main St".to_string(),
            ..Default::default()
        }
        .into_order()
        .unwrap()
    }

    fn instant_config(workers: usize, capacity: usize) -> DispatcherConfig {
        DispatcherConfig::new(workers, capacity).with_processing_delay_ms(0)
    }

    #[test]
    fn test_start_rejects_invalid_sizes() {
        assert!(matches!(
            Dispatcher::with_simulated_processing(DispatcherConfig::new(0, 4)),
            Err(DispatchError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Dispatcher::with_simulated_processing(DispatcherConfig::new(2, 0)),
            Err(DispatchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_fresh_dispatcher_state() {
        let dispatcher = Dispatcher::with_simulated_processing(instant_config(3, 5)).unwrap();

        let stats = dispatcher.stats();
        assert_eq!(stats.total_processed, 0);
        assert_eq!(stats.average_process_time_ms, 0.0);
        assert_eq!(stats.active_workers, 3);
        assert_eq!(stats.queue_length, 0);
        assert!(dispatcher.is_healthy());
        assert_eq!(dispatcher.capacity(), 5);
        assert_eq!(dispatcher.worker_count(), 3);

        dispatcher.close().unwrap();
    }

    #[test]
    fn test_results_handed_out_once() {
        let dispatcher = Dispatcher::with_simulated_processing(instant_config(1, 2)).unwrap();
        assert!(dispatcher.take_results().is_some());
        assert!(dispatcher.take_results().is_none());
        dispatcher.close().unwrap();
    }

    #[test]
    fn test_round_trip_through_custom_processor() {
        let dispatcher = Dispatcher::start(instant_config(2, 4), |mut order: Order| {
            order.notes = Some("handled".to_string());
            ProcessingOutcome::completed(order, "custom")
        })
        .unwrap();
        let results = dispatcher.take_results().unwrap();

        dispatcher.admit(order("custom_1")).unwrap();
        let processed = results.recv_timeout(Duration::from_secs(5)).unwrap();

        assert!(processed.success);
        assert_eq!(processed.message, "custom");
        assert_eq!(processed.order.notes.as_deref(), Some("handled"));
        assert!(processed.worker_id < 2);
        assert!(processed.processed_at >= dispatcher.started_at());

        dispatcher.close().unwrap();
    }

    #[test]
    fn test_close_twice_and_admit_after_close() {
        let dispatcher = Dispatcher::with_simulated_processing(instant_config(2, 2)).unwrap();

        let report = dispatcher.close().unwrap();
        assert_eq!(report.workers_stopped, 2);
        assert_eq!(report.workers_panicked, 0);
        assert!(dispatcher.is_shutting_down());
        assert!(!dispatcher.is_healthy());
        assert_eq!(dispatcher.stats().active_workers, 0);

        assert!(matches!(dispatcher.close(), Err(DispatchError::AlreadyClosed)));

        let err = dispatcher.admit(order("late")).unwrap_err();
        assert!(matches!(err, DispatchError::ShuttingDown { .. }));
        assert_eq!(err.into_order().unwrap().id, "late");
    }

    #[test]
    fn test_result_stream_ends_after_close() {
        let dispatcher = Dispatcher::with_simulated_processing(instant_config(2, 4)).unwrap();
        let results = dispatcher.take_results().unwrap();

        dispatcher.admit(order("only")).unwrap();
        let first = results.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first.order.id, "only");

        dispatcher.close().unwrap();
        assert!(results.iter().next().is_none());
    }

    #[test]
    fn test_panicking_processor_is_reported() {
        let dispatcher = Dispatcher::start(instant_config(1, 2), |_order: Order| -> ProcessingOutcome {
            panic!("processor failure")
        })
        .unwrap();

        dispatcher.admit(order("boom")).unwrap();
        let deadline = Instant::now() + Duration::from_secs(5);
        while dispatcher.queue_length() > 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        thread::sleep(Duration::from_millis(20));

        let report = dispatcher.close().unwrap();
        assert_eq!(report.workers_panicked, 1);
        assert_eq!(report.workers_stopped, 0);
    }
}
