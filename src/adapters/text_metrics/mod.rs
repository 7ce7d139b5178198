//! Text metrics adapters.
//!
//! - `HttpTextMetricsClient` - Remote readability/keyword service
//! - `LocalTextAnalyzer` - The same analyses computed in-process
//! - `NoTextMetrics` - Always absent; used when neither is configured

use async_trait::async_trait;

use crate::domain::judgment::{KeywordMetrics, ReadabilityMetrics};
use crate::ports::TextMetricsService;

mod http_client;
mod local_analyzer;

pub use http_client::HttpTextMetricsClient;
pub use local_analyzer::{LocalTextAnalyzer, MIN_READABILITY_CHARS};

/// Text metrics disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTextMetrics;

#[async_trait]
impl TextMetricsService for NoTextMetrics {
    async fn readability(&self, _text: &str) -> Option<ReadabilityMetrics> {
        None
    }

    async fn keywords(&self, _text: &str, _target_keywords: &[String]) -> Option<KeywordMetrics> {
        None
    }

    async fn is_available(&self) -> bool {
        false
    }
}
