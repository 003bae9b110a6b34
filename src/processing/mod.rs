//! # Order Processing
//!
//! The per-order business step executed by dispatcher workers. Workers only
//! see the [`OrderProcessor`] trait, so the simulated pipeline shipped here can
//! be replaced with real logic without touching the dispatcher.

pub mod rules;
pub mod simulated;

pub use rules::{BusinessRules, Classification, RuleViolation};
pub use simulated::SimulatedProcessor;

use crate::models::Order;

/// Message attached to every failed outcome
pub const FAILURE_MESSAGE: &str = "Order processing failed";

/// What processing one order produced, before the worker adds timing and identity
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingOutcome {
    pub order: Order,
    pub success: bool,
    pub error: Option<String>,
    pub message: String,
}

impl ProcessingOutcome {
    pub fn completed(order: Order, message: impl Into<String>) -> Self {
        Self {
            order,
            success: true,
            error: None,
            message: message.into(),
        }
    }

    pub fn failed(order: Order, error: impl ToString) -> Self {
        Self {
            order,
            success: false,
            error: Some(error.to_string()),
            message: FAILURE_MESSAGE.to_string(),
        }
    }
}

/// A processing step run synchronously on a worker thread.
///
/// Implementations may block (the worker owns its thread) but must not panic on
/// ordinary input; business failures are reported through
/// [`ProcessingOutcome::failed`].
pub trait OrderProcessor: Send + Sync {
    fn process(&self, order: Order) -> ProcessingOutcome;
}

impl<F> OrderProcessor for F
where
    F: Fn(Order) -> ProcessingOutcome + Send + Sync,
{
    fn process(&self, order: Order) -> ProcessingOutcome {
        self(order)
    }
}
