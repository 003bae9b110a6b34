//! # Order Dispatch Web API
//!
//! Thin HTTP surface over the [`Dispatcher`](crate::dispatcher::Dispatcher):
//! order submission, stats and a health probe. Every handler is non-blocking;
//! admission either succeeds immediately or is rejected with 503.

use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use errors::{ApiError, ApiResult};
pub use state::AppState;

/// Create the web application with all routes and middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let common_middleware = ServiceBuilder::new().layer(TraceLayer::new_for_http());

    let app = Router::new()
        .merge(routes::order_routes())
        .merge(routes::stats_routes())
        .merge(routes::health_routes())
        .layer(common_middleware)
        .with_state(state);

    info!("Web application created with all routes and middleware");
    app
}
