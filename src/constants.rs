//! # System Constants
//!
//! Order lifecycle states, priority tiers and the default business limits that
//! bound what the processing pipeline accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Business limits applied after admission
pub mod limits {
    /// Orders above this amount fail processing
    pub const MAX_ORDER_AMOUNT: f64 = 10_000.0;
    /// Orders with more items than this fail processing
    pub const MAX_ORDER_ITEMS: usize = 50;
    /// Orders above this amount are routed to priority processing
    pub const HIGH_VALUE_THRESHOLD: f64 = 1_000.0;
    /// Simulated processing delay per priority tier
    pub const PROCESSING_DELAY_PER_PRIORITY_MS: u64 = 10;
}

/// Dispatcher sizing defaults
pub mod system {
    pub const DEFAULT_WORKER_COUNT: usize = 10;
    pub const DEFAULT_BUFFER_CAPACITY: usize = 100;
    pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
    pub const WORKER_THREAD_PREFIX: &str = "order-worker";
}

/// Order lifecycle status.
///
/// The first five states are the ones a caller may submit. The remaining three
/// are assigned by the rule engine once an order has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
    Processing,
    Expedited,
    PriorityProcessing,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Processing => "processing",
            OrderStatus::Expedited => "expedited",
            OrderStatus::PriorityProcessing => "priority_processing",
        }
    }

    /// Whether a caller may submit an order in this state
    pub fn is_submittable(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending
                | OrderStatus::Paid
                | OrderStatus::Shipped
                | OrderStatus::Delivered
                | OrderStatus::Cancelled
        )
    }

    /// Parse a caller-supplied status, accepting only submittable states
    pub fn parse_submitted(value: &str) -> Result<Self, ValidationError> {
        match value.parse::<OrderStatus>() {
            Ok(status) if status.is_submittable() => Ok(status),
            _ => Err(ValidationError::InvalidStatus),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            "processing" => Ok(OrderStatus::Processing),
            "expedited" => Ok(OrderStatus::Expedited),
            "priority_processing" => Ok(OrderStatus::PriorityProcessing),
            _ => Err(ValidationError::InvalidStatus),
        }
    }
}

/// Priority tier. Affects simulated processing latency only, never queue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Priority {
    pub fn tier(&self) -> u8 {
        *self as u8
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl TryFrom<u8> for Priority {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            _ => Err(ValidationError::InvalidPriority),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.tier()
    }
}
