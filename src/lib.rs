#![allow(clippy::doc_markdown)] // Allow technical terms in docs without backticks
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Order Dispatch
//!
//! Bounded concurrent order processing: a fixed pool of worker threads drains a
//! bounded queue, applies business rules to each order and publishes results to
//! a bounded output stream, while live statistics stay readable at any time.
//!
//! ## Architecture
//!
//! ```text
//! POST /orders ──► OrderRequest::into_order ──► Dispatcher::admit ──► [order queue]
//!                                                                         │
//!                                               worker 0..N ◄─────────────┘
//!                                                   │  OrderProcessor::process
//!                                                   ▼
//!                                             [result queue] ──► result logger
//! ```
//!
//! Admission never blocks. When the order queue is full the order is rejected
//! with [`DispatchError::QueueFull`] and the caller decides what to do; the HTTP
//! layer answers 503.
//!
//! ## Module Organization
//!
//! - [`dispatcher`] - Worker pool, counters and shutdown signal
//! - [`processing`] - Business rules and the pluggable processing step
//! - [`models`] - Orders, processed results and stats
//! - [`config`] - Layered configuration (file + environment)
//! - [`web`] - axum HTTP API
//! - [`consumer`] - Default result stream reader
//! - [`testing`] - Order generators for tests and load runs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use order_dispatch::config::DispatcherConfig;
//! use order_dispatch::dispatcher::Dispatcher;
//! use order_dispatch::models::OrderRequest;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = Dispatcher::with_simulated_processing(DispatcherConfig::new(4, 32))?;
//! let results = dispatcher.take_results().expect("first call");
//!
//! let order = OrderRequest {
//!     amount: 1_500.0,
//!     items: vec!["laptop".to_string()],
//!     customer: "customer@example.com".to_string(),
//!     address: "1 Main St".to_string(),
//!     ..Default::default()
//! }
//! .into_order()?;
//!
//! dispatcher.admit(order)?;
//! let processed = results.recv()?;
//! println!("{} -> {}", processed.order.id, processed.order.status);
//!
//! dispatcher.close()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod consumer;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod models;
pub mod processing;
pub mod testing;
pub mod web;

pub use config::{AppConfig, ConfigManager, DispatcherConfig, WebConfig};
pub use constants::{OrderStatus, Priority};
pub use dispatcher::{Dispatcher, ShutdownReport};
pub use error::{DispatchError, Result, ValidationError};
pub use models::{Order, OrderRequest, ProcessedOrder, ProcessingStats};
pub use processing::{BusinessRules, OrderProcessor, ProcessingOutcome, SimulatedProcessor};
