//! HTTP adapters - REST API implementations.
//!
//! `analyze` exposes the analysis pipeline; [`build_router`] wraps it with
//! the cross-cutting layers (CORS, request tracing, request timeout).

pub mod analyze;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use analyze::{analyze_routes, AnalyzeAppState};

/// Builds the full application router.
///
/// An empty `cors_origins` list allows any origin.
pub fn build_router(
    state: AnalyzeAppState,
    cors_origins: &[String],
    request_timeout: Duration,
) -> Router {
    let cors = if cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Outermost first: trace, CORS, then the timeout around the handlers.
    analyze_routes(state).layer(
        ServiceBuilder::new()
            // Method and path only; query strings stay out of the logs.
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
            )
            .layer(cors)
            .layer(TimeoutLayer::new(request_timeout)),
    )
}
