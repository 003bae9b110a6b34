//! Post-admission validation and outcome classification.
//!
//! Pure functions over an [`Order`]: no shared state, no timing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ProcessingOutcome;
use crate::config::DispatcherConfig;
use crate::constants::{limits, OrderStatus, Priority};
use crate::models::Order;

/// Business rule that rejected an admitted order
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleViolation {
    #[error("order amount {amount} exceeds limit of {limit}")]
    AmountExceedsLimit { amount: f64, limit: f64 },
    #[error("too many items in order: {count} exceeds limit of {limit}")]
    TooManyItems { count: usize, limit: usize },
}

/// Status and message chosen for an order that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: OrderStatus,
    pub message: &'static str,
}

/// Thresholds driving validation and classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusinessRules {
    pub max_amount: f64,
    pub max_items: usize,
    pub high_value_threshold: f64,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            max_amount: limits::MAX_ORDER_AMOUNT,
            max_items: limits::MAX_ORDER_ITEMS,
            high_value_threshold: limits::HIGH_VALUE_THRESHOLD,
        }
    }
}

impl From<&DispatcherConfig> for BusinessRules {
    fn from(config: &DispatcherConfig) -> Self {
        Self {
            max_amount: config.max_order_amount,
            max_items: config.max_order_items,
            high_value_threshold: config.high_value_threshold,
        }
    }
}

impl BusinessRules {
    /// Amount ceiling first, then item count
    pub fn validate_for_processing(&self, order: &Order) -> Result<(), RuleViolation> {
        if order.amount > self.max_amount {
            return Err(RuleViolation::AmountExceedsLimit {
                amount: order.amount,
                limit: self.max_amount,
            });
        }
        if order.items.len() > self.max_items {
            return Err(RuleViolation::TooManyItems {
                count: order.items.len(),
                limit: self.max_items,
            });
        }
        Ok(())
    }

    /// First match wins: high value, then high priority, then default.
    pub fn classify(&self, order: &Order) -> Classification {
        if order.amount > self.high_value_threshold {
            Classification {
                status: OrderStatus::PriorityProcessing,
                message: "Order marked for priority processing",
            }
        } else if order.priority == Priority::High {
            Classification {
                status: OrderStatus::Expedited,
                message: "Order expedited due to high priority",
            }
        } else {
            Classification {
                status: OrderStatus::Processing,
                message: "Order processing completed",
            }
        }
    }

    /// Validate, then classify. Rules are never applied to an order that failed validation.
    pub fn apply(&self, mut order: Order) -> ProcessingOutcome {
        if let Err(violation) = self.validate_for_processing(&order) {
            return ProcessingOutcome::failed(order, violation);
        }

        let classification = self.classify(&order);
        order.status = classification.status;
        ProcessingOutcome::completed(order, classification.message)
    }
}
