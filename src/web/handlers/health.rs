//! # Health Check Handler
//!
//! Reports the dispatcher's admission health. A full queue or a shutdown in
//! progress is reported as unhealthy with a 503 so load balancers back off.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::web::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub pool: PoolHealth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolHealth {
    pub healthy: bool,
    pub queue_length: usize,
    pub workers: usize,
}

/// Health check endpoint: GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let dispatcher = &state.dispatcher;
    let healthy = dispatcher.is_healthy();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        timestamp: Utc::now(),
        pool: PoolHealth {
            healthy,
            queue_length: dispatcher.queue_length(),
            workers: dispatcher.worker_count(),
        },
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
