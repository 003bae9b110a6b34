//! # Order Factory
//!
//! Builds [`OrderRequest`]s the way real callers submit them. Random orders
//! exercise every rule branch; scenario orders are deterministic per id so a
//! load run can be replayed.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::OrderRequest;

static CATALOG: [&str; 8] = [
    "laptop",
    "mouse",
    "keyboard",
    "monitor",
    "headphones",
    "webcam",
    "speaker",
    "tablet",
];

/// Chance that a random order is a high-value, high-priority one
const HIGH_VALUE_PROBABILITY: f64 = 0.1;

/// Random pending order with 1-5 catalog items and a random priority.
///
/// Amounts fall in 10..=2009. One order in ten is instead high-value
/// (1000..=5999) and forced to priority 1.
pub fn random_order<R: Rng + ?Sized>(id: u64, rng: &mut R) -> OrderRequest {
    let item_count = rng.gen_range(1..=5);
    let items = (0..item_count)
        .filter_map(|_| CATALOG.choose(&mut *rng))
        .map(|item| (*item).to_string())
        .collect();

    let (amount, priority) = if rng.gen_bool(HIGH_VALUE_PROBABILITY) {
        (f64::from(rng.gen_range(1_000u32..6_000)), 1)
    } else {
        (f64::from(rng.gen_range(10u32..2_010)), rng.gen_range(1..=3))
    };

    OrderRequest {
        id: Some(format!("test_order_{id}")),
        amount,
        items,
        customer: format!("customer{}@example.com", rng.gen_range(0..1_000)),
        status: Some("pending".to_string()),
        address: format!(
            "{} Test Street, City {}",
            rng.gen_range(0..1_000),
            rng.gen_range(0..100)
        ),
        notes: Some(format!("Test order {id}")),
        priority: Some(priority),
        created_at: None,
    }
}

/// Traffic shape used by the load generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadScenario {
    /// Medium priority, $50-$249
    Normal,
    /// Priority 1, $500-$1499
    High,
    /// Priority 3, small single-item orders
    Burst,
    /// Fixed $100 order
    Basic,
}

impl LoadScenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadScenario::Normal => "normal",
            LoadScenario::High => "high",
            LoadScenario::Burst => "burst",
            LoadScenario::Basic => "basic",
        }
    }
}

impl fmt::Display for LoadScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown names fall back to [`LoadScenario::Basic`]
impl FromStr for LoadScenario {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "normal" => LoadScenario::Normal,
            "high" => LoadScenario::High,
            "burst" => LoadScenario::Burst,
            _ => LoadScenario::Basic,
        })
    }
}

/// Deterministic order for a load scenario
pub fn scenario_order(scenario: LoadScenario, id: u64) -> OrderRequest {
    let (prefix, amount, items, customer, address, priority, notes): (
        &str,
        f64,
        &[&str],
        String,
        String,
        u8,
        &str,
    ) = match scenario {
        LoadScenario::Normal => (
            "normal",
            (50 + id % 200) as f64,
            &["item1", "item2"],
            format!("customer{id}@example.com"),
            format!("{id} Main St"),
            2,
            "Normal order",
        ),
        LoadScenario::High => (
            "high",
            (500 + id % 1_000) as f64,
            &["expensive_item1", "expensive_item2"],
            format!("vip_customer{id}@example.com"),
            format!("{id} VIP Street"),
            1,
            "High value order",
        ),
        LoadScenario::Burst => (
            "burst",
            (10 + id % 100) as f64,
            &["quick_item"],
            format!("burst_customer{id}@example.com"),
            format!("{id} Quick St"),
            3,
            "Burst order",
        ),
        LoadScenario::Basic => (
            "test",
            100.0,
            &["test_item"],
            "test@example.com".to_string(),
            "Test Address".to_string(),
            2,
            "Test order",
        ),
    };

    OrderRequest {
        id: Some(format!("{prefix}_{id}")),
        amount,
        items: items.iter().map(|item| (*item).to_string()).collect(),
        customer,
        status: Some("pending".to_string()),
        address,
        notes: Some(notes.to_string()),
        priority: Some(priority),
        created_at: None,
    }
}
