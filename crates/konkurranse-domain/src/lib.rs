//! Konkurranseguiden Domain Layer
//!
//! This crate contains the domain model shared by every other crate in the
//! workspace. It defines the competition record, its pre-validation candidate
//! shape, the caller-supplied overrides, and the trait interfaces for the
//! external collaborators (language model, page fetcher, record store).
//!
//! ## Key Concepts
//!
//! - **CompetitionRecord**: the validated output of an extraction request
//! - **CompetitionCandidate**: loosely-typed fields before validation
//! - **ManualOverrides**: caller-supplied values that beat extracted ones
//! - **RecordStamp**: metadata stamped once per request (id, addedDate, ...)
//! - **Category**: the fixed six-value category enum and its emoji
//!
//! ## Architecture
//!
//! Infrastructure implementations live in other crates:
//! - `konkurranse-llm` implements [`traits::LlmProvider`]
//! - `konkurranse-scraper` implements [`traits::PageFetcher`]
//! - `konkurranse-store` implements [`traits::CompetitionStore`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod overrides;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use overrides::ManualOverrides;
pub use record::{CompetitionCandidate, CompetitionRecord, RecordStamp};
pub use traits::{CompetitionStore, LlmProvider, PageFetcher, ScrapedPage};
