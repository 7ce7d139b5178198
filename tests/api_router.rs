//! Integration tests for the analysis HTTP API.
//!
//! Drives the fully layered router in-process with a stub page fetcher and
//! the mock AI provider, so no network access is needed.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use startup_boost::adapters::ai::{LlmContentJudge, MockAIProvider, MockError};
use startup_boost::adapters::http::{build_router, AnalyzeAppState};
use startup_boost::adapters::text_metrics::{LocalTextAnalyzer, NoTextMetrics};
use startup_boost::application::AnalyzePageHandler;
use startup_boost::ports::{FetchError, FetchedPage, PageFetcher, TextMetricsService};

// =============================================================================
// Test Infrastructure
// =============================================================================

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Acme - Release automation for product teams</title>
  <meta name="description" content="Ship releases in minutes with Acme.">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta property="og:title" content="Acme">
  <link rel="icon" href="/favicon.ico">
</head>
<body>
  <h1>Ship every release with confidence</h1>
  <h2>Why teams switch to Acme</h2>
  <p>Acme helps product teams save time and grow revenue with simple release automation that anyone can use.</p>
  <p>Over 2,000 teams trust Acme to deploy on schedule, with rollbacks that take seconds instead of hours.</p>
  <a class="btn" href="/signup">Start free trial</a>
  <button>Book a demo</button>
  <a href="/pricing">Pricing</a>
  <a href="/privacy">Privacy Policy</a>
  <footer>Contact us at hello@acme.test</footer>
</body>
</html>"#;

/// Page fetcher that serves a canned result and records requested URLs.
struct StubFetcher {
    result: Result<FetchedPage, FetchError>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    fn serving(final_url: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(FetchedPage {
                html: LANDING_PAGE.to_string(),
                final_url: final_url.to_string(),
                status_code: 200,
            }),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(error: FetchError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.result.clone()
    }
}

fn model_reply() -> Value {
    json!({
        "valueProposition": {
            "score": 8,
            "explanation": "Clear promise aimed at product teams.",
            "strengths": ["Concrete outcome in the headline"],
            "weaknesses": [],
            "suggestion": "Quantify the time saved."
        },
        "ctaStrength": { "score": 7, "explanation": "Two visible actions." },
        "topSuggestions": ["Add customer logos"],
        "behavioralDrivers": {
            "impatient": { "user": { "score": 9 } }
        }
    })
}

fn router(
    fetcher: Arc<StubFetcher>,
    judge: LlmContentJudge,
    text_metrics: Arc<dyn TextMetricsService>,
) -> Router {
    let handler = AnalyzePageHandler::new(fetcher, Arc::new(judge), text_metrics);
    build_router(AnalyzeAppState::new(handler), &[], Duration::from_secs(30))
}

fn ai_router(fetcher: Arc<StubFetcher>) -> Router {
    let provider = MockAIProvider::new().with_json(model_reply());
    router(
        fetcher,
        LlmContentJudge::new(Arc::new(provider)),
        Arc::new(LocalTextAnalyzer),
    )
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// POST /api/analyze
// =============================================================================

#[tokio::test]
async fn analyze_returns_full_report() {
    let fetcher = StubFetcher::serving("https://acme.test/");
    let app = ai_router(fetcher.clone());

    let response = app
        .oneshot(analyze_request(r#"{"url":"https://acme.test"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let report = json_body(response).await;

    for key in [
        "url",
        "statusCode",
        "analyzedAt",
        "mainCriteria",
        "behavioralDrivers",
        "signals",
        "aiAnalysis",
        "personas",
    ] {
        assert!(report.get(key).is_some(), "missing {key}");
    }
    assert_eq!(report["url"], "https://acme.test/");
    assert_eq!(report["statusCode"], 200);
    assert_eq!(report["signals"]["trustSignals"]["hasHttps"], true);
    assert_eq!(fetcher.requests(), vec!["https://acme.test/".to_string()]);
}

#[tokio::test]
async fn analyze_blends_model_scores_into_report() {
    let app = ai_router(StubFetcher::serving("https://acme.test/"));

    let response = app
        .oneshot(analyze_request(r#"{"url":"https://acme.test"}"#))
        .await
        .unwrap();
    let report = json_body(response).await;

    assert_eq!(report["aiAnalysis"]["success"], true);
    assert_eq!(report["mainCriteria"]["valueProposition"]["breakdown"]["ai"], 8);
    assert_eq!(report["mainCriteria"]["ctaStrength"]["breakdown"]["ai"], 7);
    assert_eq!(report["behavioralDrivers"]["impatient"]["user"]["breakdown"]["ai"], 9);
    // Missing model scores count as neutral
    assert_eq!(report["mainCriteria"]["socialProof"]["breakdown"]["ai"], 5);

    // Local text metrics reached the judgment
    assert!(report["aiAnalysis"]["readabilityMetrics"].is_object());
}

#[tokio::test]
async fn analyze_survives_model_failure_with_neutral_scores() {
    let provider = MockAIProvider::new().with_error(MockError::Unavailable {
        message: "model overloaded".to_string(),
    });
    let app = router(
        StubFetcher::serving("http://acme.test/"),
        LlmContentJudge::new(Arc::new(provider)),
        Arc::new(NoTextMetrics),
    );

    let response = app
        .oneshot(analyze_request(r#"{"url":"http://acme.test"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let report = json_body(response).await;
    assert_eq!(report["aiAnalysis"]["success"], false);
    assert_eq!(report["signals"]["trustSignals"]["hasHttps"], false);
    for criterion in [
        "valueProposition",
        "ctaStrength",
        "socialProof",
        "visualReadability",
        "seoDiscoverability",
        "globalReach",
    ] {
        assert_eq!(report["mainCriteria"][criterion]["breakdown"]["ai"], 5, "{criterion}");
    }
}

#[tokio::test]
async fn missing_url_is_a_bad_request() {
    let fetcher = StubFetcher::serving("https://acme.test/");
    let app = ai_router(fetcher.clone());

    let response = app.oneshot(analyze_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "URL_REQUIRED");
    assert_eq!(body["message"], "URL is required");
    assert!(fetcher.requests().is_empty());
}

#[tokio::test]
async fn unsupported_scheme_is_a_bad_request() {
    let app = ai_router(StubFetcher::serving("https://acme.test/"));

    let response = app
        .oneshot(analyze_request(r#"{"url":"ftp://acme.test/file"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "UNSUPPORTED_SCHEME");
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let app = ai_router(StubFetcher::serving("https://acme.test/"));

    let response = app.oneshot(analyze_request("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn fetch_failure_is_a_bad_gateway() {
    let app = ai_router(StubFetcher::failing(FetchError::NotFound));

    let response = app
        .oneshot(analyze_request(r#"{"url":"https://missing.test"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(body["code"], "FETCH_FAILED");
    assert_eq!(body["message"], "Website not found. Please check the URL.");
}

// =============================================================================
// GET /health, GET /, fallback
// =============================================================================

#[tokio::test]
async fn health_reports_capabilities() {
    let app = ai_router(StubFetcher::serving("https://acme.test/"));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["aiEnabled"], true);
    assert_eq!(body["textMetricsAvailable"], true);
}

#[tokio::test]
async fn health_without_ai_or_metrics() {
    let app = router(
        StubFetcher::serving("https://acme.test/"),
        LlmContentJudge::disabled(),
        Arc::new(NoTextMetrics),
    );

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["aiEnabled"], false);
    assert_eq!(body["textMetricsAvailable"], false);
}

#[tokio::test]
async fn root_lists_endpoints() {
    let app = ai_router(StubFetcher::serving("https://acme.test/"));

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["endpoints"]["analyze"], "/api/analyze");
    assert_eq!(body["endpoints"]["health"], "/health");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = ai_router(StubFetcher::serving("https://acme.test/"));

    let response = app
        .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = ai_router(StubFetcher::serving("https://acme.test/"));

    let response = app
        .oneshot(
            Request::get("/health")
                .header(header::ORIGIN, "https://frontend.test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
