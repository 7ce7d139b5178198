//! AnalyzePageHandler - Fetches a page, judges it and scores it.
//!
//! Order of work: validate the URL, fetch, extract signals, patch https from
//! the final URL, run the AI judge and the text metrics concurrently, merge
//! the metrics into the judgment, score, and assemble the report.
//!
//! Only input validation and fetching can fail. The judge and text metrics
//! degrade to fallbacks, so once a page is fetched a full report is always
//! produced.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::domain::report::AnalysisReport;
use crate::domain::scoring::score_page;
use crate::domain::signals::SignalExtractor;
use crate::ports::{ContentJudge, FetchError, PageFetcher, TextMetricsService};

/// Command to analyze one page.
#[derive(Debug, Clone, Default)]
pub struct AnalyzePageCommand {
    /// URL as submitted; absent or blank is rejected.
    pub url: Option<String>,
}

impl AnalyzePageCommand {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Error type for page analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Please provide a valid URL (including http:// or https://)")]
    InvalidUrl,

    #[error("Invalid URL protocol. Only http and https are supported.")]
    UnsupportedScheme,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl AnalyzeError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AnalyzeError::MissingUrl => "URL_REQUIRED",
            AnalyzeError::InvalidUrl => "INVALID_URL",
            AnalyzeError::UnsupportedScheme => "UNSUPPORTED_SCHEME",
            AnalyzeError::Fetch(_) => "FETCH_FAILED",
        }
    }

    /// True for problems with the submitted request rather than the target site.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, AnalyzeError::Fetch(_))
    }
}

/// Collaborator status reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCapabilities {
    pub ai_enabled: bool,
    pub text_metrics_available: bool,
}

/// Handler for page analysis.
pub struct AnalyzePageHandler {
    fetcher: Arc<dyn PageFetcher>,
    judge: Arc<dyn ContentJudge>,
    text_metrics: Arc<dyn TextMetricsService>,
}

impl AnalyzePageHandler {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        judge: Arc<dyn ContentJudge>,
        text_metrics: Arc<dyn TextMetricsService>,
    ) -> Self {
        Self {
            fetcher,
            judge,
            text_metrics,
        }
    }

    #[tracing::instrument(
        name = "analyze_page",
        skip(self, cmd),
        fields(analysis_id = tracing::field::Empty, url = tracing::field::Empty)
    )]
    pub async fn handle(&self, cmd: AnalyzePageCommand) -> Result<AnalysisReport, AnalyzeError> {
        // 1. Validate input
        let url = validate_url(cmd.url.as_deref())?;
        let analysis_id = Uuid::new_v4();
        let span = tracing::Span::current();
        span.record("analysis_id", tracing::field::display(analysis_id));
        span.record("url", url.as_str());

        // 2. Fetch
        let page = self.fetcher.fetch(url.as_str()).await.map_err(|err| {
            tracing::warn!(error = %err, "Page fetch failed");
            AnalyzeError::from(err)
        })?;

        // 3. Extract signals; https comes from the final URL
        let signals = SignalExtractor::extract_html(&page.html).with_https(page.is_https());
        tracing::debug!(
            ctas = signals.ctas.count,
            words = signals.text_content.word_count,
            "Signals extracted"
        );

        // 4. Judge and measure concurrently, then merge
        let (judgment, metrics) = futures::join!(
            self.judge.judge(analysis_id, &page.final_url, &signals),
            self.text_metrics.analyze(&signals.text_content.full_text),
        );
        let judgment = judgment.enrich(metrics);

        // 5. Score and assemble
        let scorecard = score_page(&signals, &judgment);
        tracing::info!(
            status = page.status_code,
            ai = judgment.success,
            value_proposition = scorecard.main_criteria.value_proposition.score.value(),
            cta_strength = scorecard.main_criteria.cta_strength.score.value(),
            "Page analyzed"
        );

        Ok(AnalysisReport::assemble(
            page.final_url,
            page.status_code,
            Utc::now(),
            signals,
            judgment,
            scorecard,
        ))
    }

    pub async fn capabilities(&self) -> ServiceCapabilities {
        ServiceCapabilities {
            ai_enabled: self.judge.is_enabled(),
            text_metrics_available: self.text_metrics.is_available().await,
        }
    }
}

/// Requires a present, parseable http or https URL.
fn validate_url(raw: Option<&str>) -> Result<Url, AnalyzeError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(AnalyzeError::MissingUrl)?;
    let url = Url::parse(raw).map_err(|_| AnalyzeError::InvalidUrl)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(AnalyzeError::UnsupportedScheme),
    }
}
