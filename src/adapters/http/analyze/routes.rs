//! HTTP routes for analysis endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze, health, not_found, service_info, AnalyzeAppState};

/// Creates the analysis router with all routes.
pub fn analyze_routes(state: AnalyzeAppState) -> Router {
    Router::new()
        // POST /api/analyze
        .route("/api/analyze", post(analyze))
        // GET /health
        .route("/health", get(health))
        // GET /
        .route("/", get(service_info))
        .fallback(not_found)
        .with_state(state)
}
