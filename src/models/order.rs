//! # Order Model
//!
//! `OrderRequest` is the loosely typed wire form a caller submits. Accepting it
//! through [`OrderRequest::into_order`] applies defaults, validates every field
//! and stamps the creation time, producing an [`Order`] the dispatcher can admit
//! without re-checking it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{OrderStatus, Priority};
use crate::error::ValidationError;

/// An accepted order, ready for admission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub amount: f64,
    pub items: Vec<String>,
    pub customer: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub priority: Priority,
}

impl Order {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Order as submitted by a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderRequest {
    /// Generated when absent or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub customer: String,
    /// Defaults to `pending` when absent or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// 1=high, 2=medium, 3=low. Absent or 0 means medium.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// Accepted for compatibility and ignored; the timestamp is assigned at acceptance.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl OrderRequest {
    /// Apply defaults, validate and accept the request.
    ///
    /// Checks run in a fixed order so the first failing rule is the one reported:
    /// id, customer, status, address, amount, items, priority.
    pub fn into_order(self) -> Result<Order, ValidationError> {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => generate_order_id(),
        };

        if self.customer.is_empty() {
            return Err(ValidationError::MissingCustomer);
        }

        let status = match self.status.as_deref() {
            None | Some("") => OrderStatus::Pending,
            Some(value) => OrderStatus::parse_submitted(value)?,
        };

        if self.address.is_empty() {
            return Err(ValidationError::MissingAddress);
        }
        if !(self.amount > 0.0) || !self.amount.is_finite() {
            return Err(ValidationError::NonPositiveAmount);
        }
        if self.items.is_empty() {
            return Err(ValidationError::EmptyItems);
        }

        let priority = match self.priority {
            None | Some(0) => Priority::default(),
            Some(tier) => Priority::try_from(tier)?,
        };

        Ok(Order {
            id,
            amount: self.amount,
            items: self.items,
            customer: self.customer,
            status,
            created_at: Utc::now(),
            address: self.address,
            notes: self.notes.filter(|notes| !notes.is_empty()),
            priority,
        })
    }
}

impl From<&Order> for OrderRequest {
    fn from(order: &Order) -> Self {
        Self {
            id: Some(order.id.clone()),
            amount: order.amount,
            items: order.items.clone(),
            customer: order.customer.clone(),
            status: Some(order.status.to_string()),
            address: order.address.clone(),
            notes: order.notes.clone(),
            priority: Some(order.priority.tier()),
            created_at: None,
        }
    }
}

/// 32 hex characters of random identifier
fn generate_order_id() -> String {
    Uuid::new_v4().simple().to_string()
}
