use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use startup_boost::adapters::ai::{LlmContentJudge, OpenAIProvider};
use startup_boost::adapters::fetch::HttpPageFetcher;
use startup_boost::adapters::http::{build_router, AnalyzeAppState};
use startup_boost::adapters::text_metrics::{HttpTextMetricsClient, LocalTextAnalyzer, NoTextMetrics};
use startup_boost::application::AnalyzePageHandler;
use startup_boost::config::{AiConfig, AppConfig, TextMetricsConfig, TextMetricsMode};
use startup_boost::ports::{ContentJudge, TextMetricsService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    init_tracing(&config);
    config.validate().context("validating configuration")?;

    let fetcher = HttpPageFetcher::new(config.fetch.fetcher_config())
        .context("building page fetcher")?;
    let handler = AnalyzePageHandler::new(
        Arc::new(fetcher),
        content_judge(&config.ai)?,
        text_metrics(&config.text_metrics),
    );

    let app = build_router(
        AnalyzeAppState::new(handler),
        &config.server.cors_origins_list(),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, environment = ?config.server.environment, "StartupBoost API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn content_judge(config: &AiConfig) -> Result<Arc<dyn ContentJudge>> {
    let Some(provider_config) = config.provider_config() else {
        tracing::warn!("No AI API key configured; analyses use neutral AI scores");
        return Ok(Arc::new(LlmContentJudge::disabled()));
    };

    info!(
        provider = %provider_config.provider_name,
        model = %provider_config.model,
        "AI judgment enabled"
    );
    let provider = OpenAIProvider::new(provider_config).context("building AI provider")?;
    Ok(Arc::new(LlmContentJudge::new(Arc::new(provider))))
}

fn text_metrics(config: &TextMetricsConfig) -> Arc<dyn TextMetricsService> {
    match config.mode() {
        TextMetricsMode::Remote {
            base_url,
            local_fallback,
        } => {
            info!(%base_url, local_fallback, "Using remote text metrics service");
            let client = HttpTextMetricsClient::new(base_url, config.timeout());
            if local_fallback {
                Arc::new(client.with_local_fallback())
            } else {
                Arc::new(client)
            }
        }
        TextMetricsMode::Local => Arc::new(LocalTextAnalyzer),
        TextMetricsMode::Disabled => Arc::new(NoTextMetrics),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutting down");
}
