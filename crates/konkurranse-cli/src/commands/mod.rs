//! Command implementations.

pub mod analyze;
pub mod delete;
pub mod list;
pub mod scrape;

pub use self::analyze::execute_analyze;
pub use self::delete::execute_delete;
pub use self::list::execute_list;
pub use self::scrape::execute_scrape;

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use konkurranse_domain::{CompetitionStore, LlmProvider};
use konkurranse_extractor::{Analysis, Extractor, ExtractorConfig};
use konkurranse_gatekeeper::Gatekeeper;
use konkurranse_llm::openai::{usable_api_key, OpenAiProvider};
use konkurranse_llm::LlmError;
use konkurranse_store::JsonFileStore;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Language model chosen at startup.
pub type ModelProvider = Box<dyn LlmProvider<Error = LlmError>>;

/// Build the extractor, asking OpenAI first when a usable key is given.
pub fn build_extractor(
    config: &Config,
    api_key: Option<String>,
) -> Result<Extractor<ModelProvider>> {
    let extractor_config = ExtractorConfig {
        model_timeout_secs: config.llm.timeout_secs,
        ..ExtractorConfig::default()
    };

    match usable_api_key(api_key) {
        Some(key) => {
            let provider = OpenAiProvider::with_timeout(
                key,
                config.llm.model.clone(),
                Duration::from_secs(config.llm.timeout_secs),
            )?
            .with_endpoint(config.llm.endpoint.clone());
            debug!("Using model {}", config.llm.model);
            let provider: ModelProvider = Box::new(provider);
            Ok(Extractor::new(
                provider,
                Gatekeeper::default_config(),
                extractor_config,
            ))
        }
        None => Ok(Extractor::heuristic_only(
            Gatekeeper::default_config(),
            extractor_config,
        )),
    }
}

/// Print an analysis and optionally save it.
async fn finish_analysis(
    analysis: Analysis,
    save: bool,
    data_file: &Path,
    formatter: &Formatter,
) -> Result<()> {
    if let Some(reason) = &analysis.fallback_reason {
        eprintln!(
            "{}",
            formatter.warning(&format!("AI analysis failed, used heuristics: {}", reason))
        );
    }
    if !analysis.report.is_clean() {
        let repairs: Vec<String> = analysis.report.repairs.iter().map(|r| r.to_string()).collect();
        eprintln!("{}", formatter.info(&format!("Repaired: {}", repairs.join(", "))));
    }

    println!("{}", formatter.format_record(&analysis.record)?);

    if save {
        let store = JsonFileStore::open(data_file).await?;
        store.append(analysis.record).await?;
        eprintln!(
            "{}",
            formatter.success(&format!("Saved to {}", store.path().display()))
        );
    }

    Ok(())
}
