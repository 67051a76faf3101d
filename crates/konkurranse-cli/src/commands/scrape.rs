//! Scrape command implementation.

use super::{finish_analysis, ModelProvider};
use crate::cli::ScrapeArgs;
use crate::error::Result;
use crate::output::Formatter;
use konkurranse_domain::PageFetcher;
use konkurranse_extractor::{AnalysisRequest, Extractor};
use konkurranse_scraper::{HttpPageFetcher, ScraperConfig};
use std::path::Path;
use tracing::info;

/// Execute the scrape command.
pub async fn execute_scrape(
    args: ScrapeArgs,
    extractor: &Extractor<ModelProvider>,
    data_file: &Path,
    formatter: &Formatter,
) -> Result<()> {
    let fetcher = HttpPageFetcher::new(ScraperConfig::default())?;
    let page = fetcher.fetch(&args.url).await?;
    info!("Fetched {} ({} chars)", page.url, page.content.chars().count());

    let request = AnalysisRequest::new(args.url, page.analysis_text())
        .with_overrides(args.overrides.into());
    let analysis = extractor.analyze(request).await?;

    finish_analysis(analysis, args.save, data_file, formatter).await
}
