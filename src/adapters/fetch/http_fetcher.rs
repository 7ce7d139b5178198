//! HTTP Page Fetcher - reqwest implementation of [`PageFetcher`].
//!
//! Follows up to a fixed number of redirects, sends a fixed User-Agent, and
//! maps transport failures to [`FetchError`] variants with user-facing
//! messages. Non-2xx responses are errors.

use async_trait::async_trait;
use reqwest::{redirect, Client};
use std::error::Error as _;
use std::time::Duration;
use url::Url;

use crate::ports::{FetchError, FetchedPage, PageFetcher};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; WebsiteAnalyzer/1.0)";

/// Fetch policy.
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_redirects: 5,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(config: HttpFetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client })
    }

    fn classify(err: &reqwest::Error) -> FetchError {
        if err.is_timeout() {
            return FetchError::Timeout;
        }
        if let Some(status) = err.status() {
            return FetchError::Status(status.as_u16());
        }
        if err.is_connect() && is_dns_failure(err) {
            return FetchError::NotFound;
        }
        FetchError::Transport(root_cause(err))
    }
}

/// True when the error chain reports a failed name lookup.
fn is_dns_failure(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        let message = cause.to_string().to_lowercase();
        if message.contains("dns error")
            || message.contains("failed to lookup address")
            || message.contains("name or service not known")
        {
            return true;
        }
        source = cause.source();
    }
    false
}

fn root_cause(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message = cause.to_string();
        source = cause.source();
    }
    message
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::Transport(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme);
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| Self::classify(&e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Page fetch returned error status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let final_url = response.url().to_string();
        let html = response.text().await.map_err(|e| Self::classify(&e))?;

        tracing::debug!(url, final_url = %final_url, bytes = html.len(), "Fetched page");

        Ok(FetchedPage {
            html,
            final_url,
            status_code: status.as_u16(),
        })
    }
}
