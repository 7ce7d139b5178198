//! Application layer - Command handlers.
//!
//! This layer orchestrates the analysis pipeline and coordinates between ports.

pub mod handlers;

pub use handlers::{AnalyzeError, AnalyzePageCommand, AnalyzePageHandler, ServiceCapabilities};
