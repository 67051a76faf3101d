//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// Only `MissingField` reaches callers of `Extractor::analyze`; the others
/// describe a failed model attempt and trigger the heuristic fallback.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A required request field was empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// The model did not answer in time
    #[error("Model call timed out after {0}s")]
    Timeout(u64),

    /// The model reply held no usable JSON object
    #[error("Invalid model reply: {0}")]
    InvalidFormat(String),
}
