//! Error types for the order dispatch engine.
//!
//! Only conditions that concern the dispatcher itself live here. An order that
//! fails business validation is not an error of the dispatcher: it completes as
//! a `ProcessedOrder` with `success == false` and is counted in the stats.

use thiserror::Error;

use crate::models::Order;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The input queue is at capacity. Transient backpressure, the caller decides
    /// whether to surface it. The rejected order is handed back.
    #[error("order queue is full (capacity {capacity})")]
    QueueFull { capacity: usize, order: Box<Order> },

    /// Admission attempted after shutdown began.
    #[error("dispatcher is shutting down")]
    ShuttingDown { order: Box<Order> },

    #[error("dispatcher has already been closed")]
    AlreadyClosed,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to spawn worker {worker_id}: {reason}")]
    WorkerSpawn { worker_id: usize, reason: String },
}

impl DispatchError {
    /// Recover the order carried by an admission rejection.
    pub fn into_order(self) -> Option<Order> {
        match self {
            DispatchError::QueueFull { order, .. } | DispatchError::ShuttingDown { order } => {
                Some(*order)
            }
            _ => None,
        }
    }

    /// Whether this is a backpressure rejection the caller may retry later.
    pub fn is_backpressure(&self) -> bool {
        matches!(self, DispatchError::QueueFull { .. })
    }
}

impl From<config::ConfigError> for DispatchError {
    fn from(error: config::ConfigError) -> Self {
        DispatchError::InvalidConfiguration(error.to_string())
    }
}

/// Validation failures raised before an order is admitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("customer is required")]
    MissingCustomer,
    #[error("invalid status")]
    InvalidStatus,
    #[error("address is required")]
    MissingAddress,
    #[error("amount must be > 0")]
    NonPositiveAmount,
    #[error("items must not be empty")]
    EmptyItems,
    #[error("invalid priority (must be 1, 2, or 3)")]
    InvalidPriority,
}

pub type Result<T> = std::result::Result<T, DispatchError>;
