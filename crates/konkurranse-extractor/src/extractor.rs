//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::fallback::compose_fallback;
use crate::parser::{parse_model_reply, ModelReply};
use crate::prompt::PromptBuilder;
use crate::types::{Analysis, AnalysisRequest};
use chrono::{DateTime, Utc};
use konkurranse_domain::{CompetitionCandidate, LlmProvider, RecordStamp};
use konkurranse_gatekeeper::Gatekeeper;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The Extractor turns competition text into validated records
///
/// With a language model configured it asks the model first and falls back
/// to heuristics on any failure; without one it goes straight to heuristics.
pub struct Extractor<L>
where
    L: LlmProvider,
{
    llm_provider: Option<Arc<L>>,
    gatekeeper: Gatekeeper,
    config: ExtractorConfig,
}

impl<L> Extractor<L>
where
    L: LlmProvider + 'static,
{
    /// Create an Extractor that asks the given model first
    pub fn new(llm_provider: L, gatekeeper: Gatekeeper, config: ExtractorConfig) -> Self {
        Self {
            llm_provider: Some(Arc::new(llm_provider)),
            gatekeeper,
            config,
        }
    }

    /// Create an Extractor that only uses heuristics
    pub fn heuristic_only(gatekeeper: Gatekeeper, config: ExtractorConfig) -> Self {
        Self {
            llm_provider: None,
            gatekeeper,
            config,
        }
    }

    /// Whether a language model is configured
    pub fn ai_enabled(&self) -> bool {
        self.llm_provider.is_some()
    }

    /// The gatekeeper records pass through
    pub fn gatekeeper(&self) -> &Gatekeeper {
        &self.gatekeeper
    }

    /// Analyze a text, stamping the record with the current instant
    ///
    /// # Errors
    ///
    /// Fails only when the URL or text is empty. Model failures are
    /// recovered by heuristic extraction.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<Analysis, ExtractorError> {
        self.analyze_at(request, Utc::now()).await
    }

    /// Analyze a text as if it happened at `now`
    pub async fn analyze_at(
        &self,
        request: AnalysisRequest,
        now: DateTime<Utc>,
    ) -> Result<Analysis, ExtractorError> {
        if request.url.trim().is_empty() {
            return Err(ExtractorError::MissingField("url"));
        }
        if request.text.trim().is_empty() {
            return Err(ExtractorError::MissingField("text"));
        }

        info!(
            "Analyzing {} chars from {}",
            request.text.chars().count(),
            request.url
        );

        let Some(provider) = &self.llm_provider else {
            return Ok(self.fallback(&request, now, None));
        };

        match self.ask_model(provider.as_ref(), &request).await {
            Ok(mut candidate) => {
                candidate.apply_overrides(&request.overrides);
                let stamp = RecordStamp::new(now, request.url.as_str(), true);
                let validated = self.gatekeeper.validate(candidate, stamp);
                info!(
                    "Model extracted '{}' ({} repairs)",
                    validated.record.title,
                    validated.report.repairs.len()
                );
                Ok(Analysis {
                    record: validated.record,
                    report: validated.report,
                    fallback_reason: None,
                })
            }
            Err(e) => {
                warn!("Model extraction failed, using heuristics: {}", e);
                Ok(self.fallback(&request, now, Some(e.to_string())))
            }
        }
    }

    async fn ask_model(
        &self,
        provider: &L,
        request: &AnalysisRequest,
    ) -> Result<CompetitionCandidate, ExtractorError> {
        let prompt = PromptBuilder::new(&request.text, &request.url)
            .with_max_chars(self.config.max_prompt_chars)
            .build();

        debug!(
            "Prompt length: {} chars, model {}",
            prompt.chars().count(),
            provider.model_name()
        );

        let reply = timeout(self.config.model_timeout(), provider.generate(&prompt))
            .await
            .map_err(|_| ExtractorError::Timeout(self.config.model_timeout_secs))?
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!("Model reply length: {} chars", reply.chars().count());

        match parse_model_reply(&reply) {
            ModelReply::Parsed(candidate) => Ok(candidate),
            ModelReply::Unparseable(reason) => Err(ExtractorError::InvalidFormat(reason)),
        }
    }

    fn fallback(
        &self,
        request: &AnalysisRequest,
        now: DateTime<Utc>,
        fallback_reason: Option<String>,
    ) -> Analysis {
        let validated = compose_fallback(
            &request.text,
            &request.url,
            &request.overrides,
            now,
            &self.gatekeeper,
        );
        info!("Heuristics extracted '{}'", validated.record.title);

        Analysis {
            record: validated.record,
            report: validated.report,
            fallback_reason,
        }
    }
}
