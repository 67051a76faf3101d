//! Konkurranseguiden Router
//!
//! HTTP service that analyzes competition text and pages, and keeps the
//! saved competitions in a JSON file.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::RouterConfig;
use handlers::{create_router, AppState, ModelProvider};
use konkurranse_extractor::{Extractor, ExtractorConfig};
use konkurranse_gatekeeper::Gatekeeper;
use konkurranse_llm::openai::OpenAiProvider;
use konkurranse_scraper::HttpPageFetcher;
use konkurranse_store::JsonFileStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),

    /// Data file could not be opened
    #[error("Storage error: {0}")]
    Store(#[from] konkurranse_store::StoreError),

    /// Model client could not be built
    #[error("LLM error: {0}")]
    Llm(#[from] konkurranse_llm::LlmError),

    /// Page fetcher could not be built
    #[error("Scraper error: {0}")]
    Fetch(#[from] konkurranse_scraper::FetchError),
}

/// Wire the extractor, fetcher and store together
///
/// Without an API key the extractor runs on heuristics alone.
pub async fn build_state(
    config: &RouterConfig,
    api_key: Option<String>,
) -> Result<AppState, RouterError> {
    let extractor_config = ExtractorConfig {
        model_timeout_secs: config.llm.timeout_secs,
        ..ExtractorConfig::default()
    };

    let extractor = match api_key {
        Some(key) => {
            let provider = OpenAiProvider::with_timeout(
                key,
                config.llm.model.clone(),
                Duration::from_secs(config.llm.timeout_secs),
            )?
            .with_endpoint(config.llm.endpoint.clone());
            info!("AI analysis enabled with model {}", config.llm.model);
            let provider: ModelProvider = Box::new(provider);
            Extractor::new(provider, Gatekeeper::default_config(), extractor_config)
        }
        None => {
            warn!("No OpenAI API key configured, using heuristic analysis only");
            Extractor::heuristic_only(Gatekeeper::default_config(), extractor_config)
        }
    };

    let fetcher = HttpPageFetcher::new(config.scraper.clone())?;
    let store = JsonFileStore::open(&config.data_file).await?;

    Ok(AppState {
        extractor: Arc::new(extractor),
        fetcher: Arc::new(fetcher),
        store: Arc::new(store),
    })
}

/// Start the Router HTTP server
///
/// Builds the application state and serves it with axum until the process
/// is stopped.
pub async fn start_server(config: RouterConfig, api_key: Option<String>) -> Result<(), RouterError> {
    info!("Starting Konkurranseguiden Router");
    info!("Bind address: {}", config.bind_addr());
    info!("Data file: {}", config.data_file.display());

    let state = build_state(&config, api_key).await?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Router listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}
