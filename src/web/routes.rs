//! Route definitions grouped by functional area.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::web::{handlers, state::AppState};

/// Order submission
pub fn order_routes() -> Router<Arc<AppState>> {
    Router::new().route("/orders", post(handlers::orders::create_order))
}

pub fn stats_routes() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(handlers::stats::get_stats))
}

/// Health probe for load balancers and monitoring
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(handlers::health::health_check))
}
