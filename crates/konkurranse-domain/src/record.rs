//! Record module - the competition record and its pre-validation shape

use crate::overrides::{present, ManualOverrides};
use crate::Category;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A validated competition record
///
/// Produced only by the gatekeeper; every instance satisfies the record
/// invariants (title 3-80 chars, organizer 2-50 chars, prize at most 100
/// chars, deadline within a year of `added_date`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionRecord {
    /// Creation instant in milliseconds since the Unix epoch
    pub id: i64,

    /// Competition title
    pub title: String,

    /// Free-text description
    pub description: String,

    /// What can be won
    pub prize: String,

    /// Who runs the competition
    pub organizer: String,

    /// Last day to enter
    pub deadline: NaiveDate,

    /// Prize category
    pub category: Category,

    /// Single emoji icon
    pub image: String,

    /// Competition type, "free" unless overridden
    #[serde(rename = "type")]
    pub kind: String,

    /// When the record was created
    pub added_date: DateTime<Utc>,

    /// URL the text was taken from
    pub source_url: String,

    /// True when the language model produced the content
    pub ai_parsed: bool,
}

/// Metadata stamped on a record once per extraction request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStamp {
    /// Record identifier
    pub id: i64,

    /// Creation instant
    pub added_date: DateTime<Utc>,

    /// Source URL, opaque
    pub source_url: String,

    /// Whether the language model produced the content
    pub ai_parsed: bool,
}

impl RecordStamp {
    /// Create a stamp for a record created at `now`
    ///
    /// The id is the creation instant in epoch milliseconds.
    pub fn new(now: DateTime<Utc>, source_url: impl Into<String>, ai_parsed: bool) -> Self {
        Self {
            id: now.timestamp_millis(),
            added_date: now,
            source_url: source_url.into(),
            ai_parsed,
        }
    }

    /// Recover the stamp of an existing record
    pub fn of(record: &CompetitionRecord) -> Self {
        Self {
            id: record.id,
            added_date: record.added_date,
            source_url: record.source_url.clone(),
            ai_parsed: record.ai_parsed,
        }
    }

    /// The creation date, which anchors the deadline bounds
    pub fn today(&self) -> NaiveDate {
        self.added_date.date_naive()
    }
}

/// Record fields before validation
///
/// Every field is optional and loosely typed: this is what the model reply
/// parses into and what the heuristic extractor assembles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitionCandidate {
    /// Competition title
    pub title: Option<String>,

    /// Free-text description
    pub description: Option<String>,

    /// What can be won
    pub prize: Option<String>,

    /// Who runs the competition
    pub organizer: Option<String>,

    /// Deadline in any recognizable date shape
    pub deadline: Option<String>,

    /// Category label
    pub category: Option<String>,

    /// Emoji icon
    pub image: Option<String>,

    /// Competition type
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl CompetitionCandidate {
    /// Overwrite fields with every present override value
    pub fn apply_overrides(&mut self, overrides: &ManualOverrides) {
        let slots = [
            (&mut self.title, &overrides.title),
            (&mut self.organizer, &overrides.organizer),
            (&mut self.prize, &overrides.prize),
            (&mut self.deadline, &overrides.deadline),
            (&mut self.category, &overrides.category),
            (&mut self.kind, &overrides.kind),
        ];

        for (slot, value) in slots {
            if let Some(value) = present(value) {
                *slot = Some(value.to_string());
            }
        }
    }
}

impl From<&CompetitionRecord> for CompetitionCandidate {
    fn from(record: &CompetitionRecord) -> Self {
        Self {
            title: Some(record.title.clone()),
            description: Some(record.description.clone()),
            prize: Some(record.prize.clone()),
            organizer: Some(record.organizer.clone()),
            deadline: Some(record.deadline.to_string()),
            category: Some(record.category.as_str().to_string()),
            image: Some(record.image.clone()),
            kind: Some(record.kind.clone()),
        }
    }
}
