//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the analysis pipeline and the outside world. Adapters implement these ports.
//!
//! - `PageFetcher` - Retrieves the HTML of a page
//! - `AIProvider` - LLM chat completions
//! - `ContentJudge` - Infallible AI judgment of page content
//! - `TextMetricsService` - Optional readability and keyword statistics

mod ai_provider;
mod content_judge;
mod page_fetcher;
mod text_metrics;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message, MessageRole,
    ProviderInfo, RequestMetadata, TokenUsage,
};
pub use content_judge::ContentJudge;
pub use page_fetcher::{FetchError, FetchedPage, PageFetcher};
pub use text_metrics::TextMetricsService;
