//! Analysis HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnalyzeRequest, ErrorResponse, HealthResponse, ServiceEndpoints, ServiceInfo};
pub use handlers::{AnalyzeApiError, AnalyzeAppState};
pub use routes::analyze_routes;
