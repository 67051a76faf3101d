//! Konkurranseguiden Extractor
//!
//! Turns a block of competition text into a validated competition record.
//!
//! # Architecture
//!
//! ```text
//! Text → Extractor → LLM → candidate ┐
//!          │ (no model / failure)     ├→ Gatekeeper → CompetitionRecord
//!          └→ heuristic extractors ───┘
//! ```
//!
//! The heuristic path is a ladder of regex field extractors, a keyword
//! category classifier and the date normalizer. The model path prompts the
//! model for a JSON object and parses it leniently. Both paths end in the
//! same gatekeeper, so every record satisfies the same invariants.
//!
//! # Example Usage
//!
//! ```no_run
//! use konkurranse_extractor::{AnalysisRequest, Extractor, ExtractorConfig};
//! use konkurranse_gatekeeper::Gatekeeper;
//! use konkurranse_llm::OpenAiProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = OpenAiProvider::new("sk-...", "gpt-4o-mini")?;
//! let extractor = Extractor::new(llm, Gatekeeper::default_config(), ExtractorConfig::default());
//!
//! let request = AnalysisRequest::new(
//!     "https://www.elkjop.no/vinn",
//!     "Vinn en iPhone 16! Frist 15. oktober 2025",
//! );
//! let analysis = extractor.analyze(request).await?;
//!
//! println!("{} ({})", analysis.record.title, analysis.record.category);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod extractor;
mod fallback;
mod fields;
mod parser;
mod prompt;
mod types;


pub use classifier::{classify, Classification, IKEA_EMOJI};
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use fallback::{compose_fallback, heuristic_candidate};
pub use fields::{capitalize, extract_organizer, extract_prize, extract_title, hostname};
pub use parser::{extract_json, parse_model_reply, ModelReply};
pub use prompt::{PromptBuilder, DEFAULT_MAX_PROMPT_CHARS};
pub use types::{Analysis, AnalysisRequest};
