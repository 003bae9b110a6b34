use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Order;

/// Outcome of processing one admitted order.
///
/// Built exactly once, by the worker that processed the order, and never
/// modified afterwards. Ownership passes to whoever drains the result queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedOrder {
    /// The order after rule application; its status may have changed
    pub order: Order,
    pub processed_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub worker_id: usize,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable outcome
    #[serde(rename = "result")]
    pub message: String,
}
