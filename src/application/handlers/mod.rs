//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

mod analyze_page;

pub use analyze_page::{AnalyzeError, AnalyzePageCommand, AnalyzePageHandler, ServiceCapabilities};
