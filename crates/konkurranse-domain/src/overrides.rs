//! Manual overrides supplied by the caller

use serde::{Deserialize, Serialize};

/// Field values supplied by the caller that take precedence over anything
/// extracted from the text or produced by the language model.
///
/// A value only counts when it is a non-empty string after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManualOverrides {
    /// Competition title
    pub title: Option<String>,

    /// Organizer name
    pub organizer: Option<String>,

    /// Prize description
    pub prize: Option<String>,

    /// Deadline, any date shape the gatekeeper understands
    pub deadline: Option<String>,

    /// Category label
    pub category: Option<String>,

    /// Competition type ("free", ...)
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl ManualOverrides {
    /// Returns true when no override value is present
    pub fn is_empty(&self) -> bool {
        [
            &self.title,
            &self.organizer,
            &self.prize,
            &self.deadline,
            &self.category,
            &self.kind,
        ]
        .iter()
        .all(|value| present(value).is_none())
    }
}

/// The override value, if it is a non-blank string
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
