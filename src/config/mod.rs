//! # Configuration
//!
//! Typed configuration for the dispatcher and its HTTP layer. Every section has
//! serde defaults, so an empty source yields a working configuration; the
//! [`loader`] layers files and environment variables on top.

pub mod loader;

pub use loader::ConfigManager;

use serde::{Deserialize, Serialize};

use crate::constants::{limits, system};
use crate::error::{DispatchError, Result};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dispatcher: DispatcherConfig,
    pub web: WebConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.dispatcher.validate()?;
        self.web.validate()
    }
}

/// Worker pool sizing and business limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Number of worker threads started with the dispatcher
    pub worker_count: usize,
    /// Capacity of both the order queue and the result queue
    pub buffer_capacity: usize,
    /// Simulated latency added per priority tier
    pub processing_delay_per_priority_ms: u64,
    pub max_order_amount: f64,
    pub max_order_items: usize,
    pub high_value_threshold: f64,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            worker_count: system::DEFAULT_WORKER_COUNT,
            buffer_capacity: system::DEFAULT_BUFFER_CAPACITY,
            processing_delay_per_priority_ms: limits::PROCESSING_DELAY_PER_PRIORITY_MS,
            max_order_amount: limits::MAX_ORDER_AMOUNT,
            max_order_items: limits::MAX_ORDER_ITEMS,
            high_value_threshold: limits::HIGH_VALUE_THRESHOLD,
        }
    }
}

impl DispatcherConfig {
    pub fn new(worker_count: usize, buffer_capacity: usize) -> Self {
        Self {
            worker_count,
            buffer_capacity,
            ..Self::default()
        }
    }

    pub fn with_processing_delay_ms(mut self, delay_ms: u64) -> Self {
        self.processing_delay_per_priority_ms = delay_ms;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            return Err(DispatchError::InvalidConfiguration(
                "worker_count must be greater than 0".to_string(),
            ));
        }
        if self.buffer_capacity == 0 {
            return Err(DispatchError::InvalidConfiguration(
                "buffer_capacity must be greater than 0".to_string(),
            ));
        }
        if !(self.max_order_amount > 0.0) || !self.max_order_amount.is_finite() {
            return Err(DispatchError::InvalidConfiguration(
                "max_order_amount must be a positive number".to_string(),
            ));
        }
        if self.max_order_items == 0 {
            return Err(DispatchError::InvalidConfiguration(
                "max_order_items must be greater than 0".to_string(),
            ));
        }
        if !(self.high_value_threshold >= 0.0) || !self.high_value_threshold.is_finite() {
            return Err(DispatchError::InvalidConfiguration(
                "high_value_threshold must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub bind_address: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: system::DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

impl WebConfig {
    pub fn validate(&self) -> Result<()> {
        self.bind_address
            .parse::<std::net::SocketAddr>()
            .map(|_| ())
            .map_err(|e| {
                DispatchError::InvalidConfiguration(format!(
                    "bind_address '{}' is not a socket address: {e}",
                    self.bind_address
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dispatcher.worker_count, 10);
        assert_eq!(config.dispatcher.buffer_capacity, 100);
        assert_eq!(config.web.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_zero_sizes_rejected() {
        assert!(DispatcherConfig::new(0, 10).validate().is_err());
        assert!(DispatcherConfig::new(2, 0).validate().is_err());
        assert!(DispatcherConfig::new(2, 10).validate().is_ok());
    }

    #[test]
    fn test_limits_validated() {
        let config = DispatcherConfig {
            max_order_amount: f64::NAN,
            ..DispatcherConfig::default()
        };
        assert!(config.validate().is_err());

        let config = DispatcherConfig {
            max_order_items: 0,
            ..DispatcherConfig::default()
        };
        assert!(config.validate().is_err());

        let config = DispatcherConfig {
            high_value_threshold: -1.0,
            ..DispatcherConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_address_validated() {
        let web = WebConfig {
            bind_address: "not-an-address".to_string(),
        };
        let err = web.validate().unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }
}
