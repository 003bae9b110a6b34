//! # Web API Request Handlers
//!
//! One module per functional area.

pub mod health;
pub mod orders;
pub mod stats;
