//! revfeed-rv (Review Feedback) - Review collection and AI enrichment service
//!
//! Accepts customer star-rating reviews over HTTP, enriches each with a
//! Gemini-generated reply, summary, and recommended actions, and serves
//! filtered listings plus aggregate analytics.

use anyhow::Result;
use clap::Parser;
use revfeed_common::config::GeminiConfig;
use revfeed_rv::services::{Enrichment, GeminiClient};
use revfeed_rv::store::ReviewStore;
use revfeed_rv::{build_router, AppState};
use tracing::info;

/// Command-line options. Each falls back to an environment variable, then
/// to a compiled default.
#[derive(Debug, Parser)]
#[command(name = "revfeed-rv", version)]
struct Args {
    /// Path to the JSON data file
    #[arg(long, env = "REVFEED_DATA_FILE", default_value = "data/reviews.json")]
    data_file: String,

    /// Port to listen on
    #[arg(long, env = "REVFEED_PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Review Feedback (revfeed-rv) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Missing provider credential is startup-fatal
    let gemini_config = GeminiConfig::from_env()?;
    info!("Gemini model: {}", gemini_config.model);

    let client = GeminiClient::new(gemini_config)?;
    let enrichment = Enrichment::new(client);

    let store = ReviewStore::new(&args.data_file);
    info!("Data file: {}", store.data_file().display());

    let state = AppState::new(store, enrichment);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!("revfeed-rv listening on http://0.0.0.0:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
