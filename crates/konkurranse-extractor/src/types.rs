//! Request and response types for analysis

use konkurranse_domain::{CompetitionRecord, ManualOverrides};
use konkurranse_gatekeeper::ValidationReport;

/// Request to analyze one competition text
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    /// Source URL; opaque except for hostname extraction
    pub url: String,

    /// Competition text
    pub text: String,

    /// Caller-supplied values that win over extracted ones
    pub overrides: ManualOverrides,
}

impl AnalysisRequest {
    /// Create a request without overrides
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            overrides: ManualOverrides::default(),
        }
    }

    /// Attach manual overrides
    pub fn with_overrides(mut self, overrides: ManualOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Result of an analysis
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The validated record
    pub record: CompetitionRecord,

    /// Repairs the gatekeeper applied
    pub report: ValidationReport,

    /// Why the model path was abandoned, when it was tried and failed
    pub fallback_reason: Option<String>,
}
