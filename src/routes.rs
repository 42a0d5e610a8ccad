//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /v/{id}`  - Thumbnail redirect (`?s=`, `?sfb=`, `?c=`)
//! - `GET  /v`       - Missing id, always 400
//! - `GET  /health`  - Health check: cache backend
//! - `*`             - Usage page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, missing_video_id_handler, thumbnail_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::usage_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// The id segment is a wildcard so that ids containing `/` reach the handler
/// and are rejected with 400 instead of falling through to the usage page.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v", get(missing_video_id_handler))
        .route("/v/{*id}", get(thumbnail_handler))
        .route("/health", get(health_handler))
        .fallback(usage_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application with trailing slashes trimmed before routing.
///
/// `/v/123/` is served as `/v/123`, and `/v/` as `/v`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
