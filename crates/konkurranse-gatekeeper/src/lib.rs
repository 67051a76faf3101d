//! Konkurranseguiden Gatekeeper
//!
//! The normalization and validation layer every competition record passes
//! through, whether it came from the language model or from the heuristic
//! extractor.
//!
//! The Gatekeeper provides:
//! - Date normalization (Norwegian month names, ISO and slash dates)
//! - Record validation with repair: it never rejects, it substitutes defaults
//! - A report of every repair performed
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use konkurranse_domain::{CompetitionCandidate, RecordStamp};
//! use konkurranse_gatekeeper::Gatekeeper;
//!
//! let gatekeeper = Gatekeeper::default_config();
//! let stamp = RecordStamp::new(Utc::now(), "https://example.com", false);
//!
//! let validated = gatekeeper.validate(CompetitionCandidate::default(), stamp);
//! assert_eq!(validated.record.title, "New competition");
//! assert!(!validated.report.is_clean());
//! ```

#![warn(missing_docs)]

mod config;
mod dates;
mod validator;

pub use config::ValidationConfig;
pub use dates::{month_number, normalize_date, parse_deadline};
pub use validator::{truncate_chars, Gatekeeper, Repair, Validated, ValidationReport};
