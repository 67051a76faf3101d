//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction rejected the input
    #[error("Analysis failed: {0}")]
    Extractor(#[from] konkurranse_extractor::ExtractorError),

    /// The page could not be fetched
    #[error("Could not access the website: {0}")]
    Fetch(#[from] konkurranse_scraper::FetchError),

    /// Model client could not be built
    #[error("LLM error: {0}")]
    Llm(#[from] konkurranse_llm::LlmError),

    /// Data file error
    #[error("Storage error: {0}")]
    Store(#[from] konkurranse_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No competition with the given id
    #[error("Competition {0} not found")]
    NotFound(i64),
}
