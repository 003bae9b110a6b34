//! # Order Submission Handler
//!
//! `POST /orders` decodes the body, applies defaults and validation, then
//! admits the order. The 201 is only sent once the order is queued.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::logging::log_order_operation;
use crate::models::{Order, OrderRequest};
use crate::web::errors::{ApiError, ApiResult};
use crate::web::state::AppState;

/// Submit an order: POST /orders
///
/// - 201 with the accepted order
/// - 400 for malformed JSON or a validation failure
/// - 503 when the queue is full or the dispatcher is shutting down
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let request: OrderRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejecting undecodable order body");
        ApiError::from(e)
    })?;

    let order = request.into_order().map_err(|e| {
        debug!(error = %e, "Rejecting invalid order");
        ApiError::from(e)
    })?;

    let accepted = order.clone();
    state.dispatcher.admit(order).map_err(|e| {
        warn!(
            order_id = %accepted.id,
            queue_length = state.dispatcher.queue_length(),
            error = %e,
            "Order admission rejected"
        );
        ApiError::from(e)
    })?;

    let details = format!("priority {}", accepted.priority.tier());
    log_order_operation(
        "admit",
        &accepted.id,
        None,
        accepted.status.as_str(),
        Some(details.as_str()),
    );

    Ok((StatusCode::CREATED, Json(accepted)))
}
