use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::models::ProcessingStats;
use crate::web::state::AppState;

/// Processing statistics: GET /stats
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ProcessingStats> {
    Json(state.dispatcher.stats())
}
