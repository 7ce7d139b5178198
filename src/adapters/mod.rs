//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM providers and the content judge built on them
//! - `fetch` - HTTP page fetching
//! - `text_metrics` - Readability and keyword analysis (remote or local)
//! - `http` - Axum REST API

pub mod ai;
pub mod fetch;
pub mod http;
pub mod text_metrics;
