//! HTTP handlers for analysis endpoints.
//!
//! These handlers connect Axum routes to the analysis command handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

use crate::application::{AnalyzeError, AnalyzePageCommand, AnalyzePageHandler};
use crate::domain::report::AnalysisReport;

use super::dto::{AnalyzeRequest, ErrorResponse, HealthResponse, ServiceInfo};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analysis API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalyzeApiError {
    /// The request body was not valid JSON.
    InvalidBody(String),
    Analyze(AnalyzeError),
}

impl IntoResponse for AnalyzeApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalyzeApiError::InvalidBody(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AnalyzeApiError::Analyze(err) if err.is_input_error() => {
                (StatusCode::BAD_REQUEST, ErrorResponse::from_analyze_error(&err))
            }
            AnalyzeApiError::Analyze(err) => {
                (StatusCode::BAD_GATEWAY, ErrorResponse::from_analyze_error(&err))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<AnalyzeError> for AnalyzeApiError {
    fn from(error: AnalyzeError) -> Self {
        AnalyzeApiError::Analyze(error)
    }
}

impl From<JsonRejection> for AnalyzeApiError {
    fn from(rejection: JsonRejection) -> Self {
        AnalyzeApiError::InvalidBody(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing the analysis pipeline.
#[derive(Clone)]
pub struct AnalyzeAppState {
    pub handler: Arc<AnalyzePageHandler>,
}

impl AnalyzeAppState {
    pub fn new(handler: AnalyzePageHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/analyze
///
/// Analyzes the page at the submitted URL and returns the full report.
pub async fn analyze(
    State(state): State<AnalyzeAppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AnalyzeApiError> {
    let Json(request) = payload?;

    let report = state
        .handler
        .handle(AnalyzePageCommand { url: request.url })
        .await?;

    Ok(Json(report))
}

/// GET /health
pub async fn health(State(state): State<AnalyzeAppState>) -> Json<HealthResponse> {
    let capabilities = state.handler.capabilities().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Website analyzer is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ai_enabled: capabilities.ai_enabled,
        text_metrics_available: capabilities.text_metrics_available,
        timestamp: Utc::now(),
    })
}

/// GET /
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            code: "NOT_FOUND".to_string(),
            message: "Route not found".to_string(),
            details: None,
        }),
    )
}
