//! Helpers for generating realistic orders in tests, benchmarks and the load
//! generator.

pub mod order_factory;

pub use order_factory::{random_order, scenario_order, LoadScenario};
