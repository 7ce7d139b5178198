//! Text Metrics Port - Auxiliary readability and keyword statistics.
//!
//! Both calls are optional: absence or failure is `None`, never an error.

use async_trait::async_trait;

use crate::domain::judgment::{KeywordMetrics, ReadabilityMetrics, TextMetrics};

#[async_trait]
pub trait TextMetricsService: Send + Sync {
    async fn readability(&self, text: &str) -> Option<ReadabilityMetrics>;

    async fn keywords(&self, text: &str, target_keywords: &[String]) -> Option<KeywordMetrics>;

    /// Whether the service is reachable right now.
    async fn is_available(&self) -> bool;

    /// Runs both analyses concurrently.
    async fn analyze(&self, text: &str) -> TextMetrics {
        let (readability, keywords) =
            futures::join!(self.readability(text), self.keywords(text, &[]));
        TextMetrics::new(readability, keywords)
    }
}
