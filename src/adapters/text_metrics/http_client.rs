//! HTTP Text Metrics Client - remote readability and keyword service.
//!
//! Endpoints: `GET /health`, `POST /analyze/readability` and
//! `POST /analyze/keywords`. Any failure is logged and reported as `None`.
//! When a local fallback is attached, it answers whenever the remote call
//! yields nothing.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::LocalTextAnalyzer;
use crate::domain::judgment::{
    Difficulty, KeywordDensity, KeywordMetrics, KeywordStatistics, ReadabilityMetrics,
    TargetKeyword,
};
use crate::ports::TextMetricsService;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(2);

pub struct HttpTextMetricsClient {
    base_url: String,
    client: Client,
    timeout: Duration,
    fallback: Option<LocalTextAnalyzer>,
}

impl HttpTextMetricsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout,
            fallback: None,
        }
    }

    /// Answers locally when the remote service fails.
    pub fn with_local_fallback(mut self) -> Self {
        self.fallback = Some(LocalTextAnalyzer);
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: Serialize + Sync, R: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, reqwest::Error> {
        self.client
            .post(self.endpoint(path))
            .timeout(self.timeout)
            .json(body)
            .send()
            .await?
            .json()
            .await
    }

    async fn remote_readability(&self, text: &str) -> Option<ReadabilityMetrics> {
        let body = TextRequest {
            text,
            target_keywords: None,
        };
        match self.post::<_, ReadabilityReply>("/analyze/readability", &body).await {
            Ok(reply) => reply.into_metrics(),
            Err(err) => {
                tracing::warn!(error = %err, "Text metrics readability analysis failed");
                None
            }
        }
    }

    async fn remote_keywords(&self, text: &str, targets: &[String]) -> Option<KeywordMetrics> {
        let body = TextRequest {
            text,
            target_keywords: Some(targets),
        };
        match self.post::<_, KeywordsReply>("/analyze/keywords", &body).await {
            Ok(reply) => reply.into_metrics(),
            Err(err) => {
                tracing::warn!(error = %err, "Text metrics keyword analysis failed");
                None
            }
        }
    }
}

#[async_trait]
impl TextMetricsService for HttpTextMetricsClient {
    async fn readability(&self, text: &str) -> Option<ReadabilityMetrics> {
        match self.remote_readability(text).await {
            Some(metrics) => Some(metrics),
            None => self.fallback.and_then(|_| LocalTextAnalyzer::readability_of(text)),
        }
    }

    async fn keywords(&self, text: &str, target_keywords: &[String]) -> Option<KeywordMetrics> {
        match self.remote_keywords(text, target_keywords).await {
            Some(metrics) => Some(metrics),
            None => self
                .fallback
                .and_then(|_| LocalTextAnalyzer::keywords_of(text, target_keywords)),
        }
    }

    async fn is_available(&self) -> bool {
        let reply = self
            .client
            .get(self.endpoint("/health"))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await;
        match reply {
            Ok(response) => response
                .json::<HealthReply>()
                .await
                .map(|health| health.status == "healthy")
                .unwrap_or(false),
            Err(err) => {
                tracing::warn!(error = %err, "Text metrics service not available");
                false
            }
        }
    }
}

// ----- Wire types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TextRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_keywords: Option<&'a [String]>,
}

#[derive(Debug, Deserialize)]
struct HealthReply {
    status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReadabilityReply {
    success: bool,
    metrics: Option<ReadabilityFigures>,
    analysis: Option<ReadabilityAnalysis>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReadabilityFigures {
    flesch_reading_ease: f64,
    flesch_kincaid_grade: f64,
    avg_sentence_length: f64,
    avg_word_length: f64,
    difficulty: Difficulty,
    recommendation: String,
    readability_score: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReadabilityAnalysis {
    sentence_count: usize,
    word_count: usize,
    is_optimal: bool,
}

impl ReadabilityReply {
    fn into_metrics(self) -> Option<ReadabilityMetrics> {
        if !self.success {
            return None;
        }
        let figures = self.metrics?;
        let analysis = self.analysis?;
        Some(ReadabilityMetrics {
            flesch_reading_ease: figures.flesch_reading_ease,
            flesch_kincaid_grade: figures.flesch_kincaid_grade,
            avg_sentence_length: figures.avg_sentence_length,
            avg_word_length: figures.avg_word_length,
            difficulty: figures.difficulty,
            recommendation: figures.recommendation,
            readability_score: figures.readability_score.min(10),
            sentence_count: analysis.sentence_count,
            word_count: analysis.word_count,
            is_optimal: analysis.is_optimal,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeywordsReply {
    success: bool,
    #[serde(default)]
    top_keywords: Vec<KeywordDensity>,
    #[serde(default)]
    target_keywords: Vec<TargetKeyword>,
    statistics: Option<KeywordStatistics>,
    #[serde(default)]
    recommendations: Vec<String>,
}

impl KeywordsReply {
    fn into_metrics(self) -> Option<KeywordMetrics> {
        if !self.success {
            return None;
        }
        Some(KeywordMetrics {
            top_keywords: self.top_keywords,
            target_keywords: self.target_keywords,
            statistics: self.statistics?,
            recommendations: self.recommendations,
        })
    }
}
