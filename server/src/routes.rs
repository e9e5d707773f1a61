//! HTTP Routes
//!
//! Unsupported methods on either route get a 405 from the method
//! router; unmatched paths fall through to axum's default 404.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/endpoints", get(handlers::list_endpoints))
        .route(
            "/endpoints/{identifier}",
            get(handlers::get_endpoint).post(handlers::upsert_endpoint),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
