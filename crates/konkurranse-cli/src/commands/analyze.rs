//! Analyze command implementation.

use super::{finish_analysis, ModelProvider};
use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use konkurranse_extractor::{AnalysisRequest, Extractor};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    extractor: &Extractor<ModelProvider>,
    data_file: &Path,
    formatter: &Formatter,
) -> Result<()> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => read_stdin()?,
    };
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("No competition text given".to_string()));
    }

    let request = AnalysisRequest::new(args.url, text).with_overrides(args.overrides.into());
    let analysis = extractor.analyze(request).await?;

    finish_analysis(analysis, args.save, data_file, formatter).await
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
