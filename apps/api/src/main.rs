mod config;
mod errors;
mod llm_client;
mod routes;
mod segmentation;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::segmentation::Segmenter;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job board API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize segmenter (remote model when a key is configured, pattern fallback otherwise)
    let segmenter = if config.generation.api_key.is_some() {
        let llm = LlmClient::new(config.generation.clone())
            .context("Failed to build text-generation HTTP client")?;
        info!(
            "LLM client initialized (model: {}, endpoint: {})",
            llm.model_id(),
            config.generation.endpoint
        );
        Segmenter::new(Arc::new(llm))
    } else {
        warn!("GENERATION_API_KEY not set; segmentation will use the pattern fallback only");
        Segmenter::offline()
    };

    // Build app state
    let state = AppState {
        segmenter: Arc::new(segmenter),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the front end is served from a different origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
