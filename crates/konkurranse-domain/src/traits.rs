//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction pipeline and
//! infrastructure. Implementations live in other crates.

use crate::CompetitionRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Trait for language model operations
///
/// Implemented by the infrastructure layer (konkurranse-llm)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Error type for LLM operations
    type Error: std::fmt::Display + Send;

    /// Generate a completion for the prompt
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Name of the model answering prompts
    fn model_name(&self) -> &str;
}

/// Boxed providers, so callers can pick a provider at runtime
#[async_trait]
impl<'a, E> LlmProvider for Box<dyn LlmProvider<Error = E> + 'a>
where
    E: std::fmt::Display + Send + 'static,
{
    type Error = E;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        (**self).generate(prompt).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Text content scraped from a web page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedPage {
    /// Page URL as requested
    pub url: String,

    /// Page title (`<title>` or first `<h1>`)
    pub title: String,

    /// Visible text, whitespace-collapsed and length-capped
    pub content: String,
}

impl ScrapedPage {
    /// The text handed to the extraction pipeline: title line, then content
    pub fn analysis_text(&self) -> String {
        if self.title.is_empty() {
            self.content.clone()
        } else {
            format!("{}\n{}", self.title, self.content)
        }
    }
}

/// Trait for fetching the text of a competition page
///
/// Implemented by the infrastructure layer (konkurranse-scraper)
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Error type for fetch operations
    type Error: std::fmt::Display + Send;

    /// Fetch a page and reduce it to its visible text
    async fn fetch(&self, url: &str) -> Result<ScrapedPage, Self::Error>;
}

/// Trait for persisting competition records
///
/// Implemented by the infrastructure layer (konkurranse-store)
#[async_trait]
pub trait CompetitionStore: Send + Sync {
    /// Error type for store operations
    type Error: std::fmt::Display + Send;

    /// Load every stored record, newest first
    async fn load_all(&self) -> Result<Vec<CompetitionRecord>, Self::Error>;

    /// Replace the stored records
    async fn save_all(&self, records: &[CompetitionRecord]) -> Result<(), Self::Error>;

    /// Add a record in front of the existing ones
    async fn append(&self, record: CompetitionRecord) -> Result<(), Self::Error>;

    /// Delete a record by id, returning whether it existed
    async fn delete(&self, id: i64) -> Result<bool, Self::Error>;
}
