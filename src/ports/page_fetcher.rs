//! Page Fetcher Port - Retrieves the raw HTML of a page.
//!
//! Timeout and redirect policy belong to the implementation. Callers receive
//! the body, the final URL after redirects, and the HTTP status.

use async_trait::async_trait;

/// A fetched page before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub html: String,
    /// URL after following redirects.
    pub final_url: String,
    pub status_code: u16,
}

impl FetchedPage {
    /// True when the final URL was served over TLS.
    pub fn is_https(&self) -> bool {
        self.final_url
            .get(..8)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"))
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Fetch failures, each with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL protocol. Only http and https are supported.")]
    UnsupportedScheme,

    #[error("Website not found. Please check the URL.")]
    NotFound,

    #[error("Request timed out. The website took too long to respond.")]
    Timeout,

    #[error("Failed to fetch page. Status: {0}")]
    Status(u16),

    #[error("Failed to fetch page: {0}")]
    Transport(String),
}
