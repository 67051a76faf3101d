//! Konkurranseguiden Page Fetcher
//!
//! Fetches a competition page over HTTP and reduces it to its visible text.
//!
//! # Examples
//!
//! ```no_run
//! use konkurranse_domain::PageFetcher;
//! use konkurranse_scraper::{HttpPageFetcher, ScraperConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = HttpPageFetcher::new(ScraperConfig::default())?;
//! let page = fetcher.fetch("https://www.example.com/konkurranse").await?;
//! println!("{}: {} chars", page.title, page.content.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod markup;

use async_trait::async_trait;
use konkurranse_domain::{PageFetcher, ScrapedPage};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub use markup::{decode_entities, strip_markup};

/// Browser User-Agent; some competition sites refuse unknown clients
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Errors that can occur while fetching a page
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, timeout or client setup error
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error {status}: {url}")]
    Status {
        /// Status code returned
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The page had no visible text
    #[error("No text content found at {0}")]
    Empty(String),
}

/// Page fetcher settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Request timeout (seconds)
    pub timeout_secs: u64,

    /// Visible text is cut to this many characters
    pub max_content_chars: usize,

    /// Redirects followed before giving up
    pub max_redirects: usize,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            max_content_chars: 4000,
            max_redirects: 5,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScraperConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.max_content_chars == 0 {
            return Err("max_content_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Fetches pages with reqwest
pub struct HttpPageFetcher {
    client: reqwest::Client,
    max_content_chars: usize,
}

impl HttpPageFetcher {
    /// Create a fetcher
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ScraperConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self {
            client,
            max_content_chars: config.max_content_chars,
        })
    }

    /// Download the raw HTML of a page
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        info!("Fetching HTML from: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        info!("Fetched {} bytes of HTML", html.len());
        Ok(html)
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    type Error = FetchError;

    async fn fetch(&self, url: &str) -> Result<ScrapedPage, Self::Error> {
        let html = self.fetch_html(url).await?;
        let (title, content) = strip_markup(&html, self.max_content_chars);

        if title.is_empty() && content.is_empty() {
            return Err(FetchError::Empty(url.to_string()));
        }

        Ok(ScrapedPage {
            url: url.to_string(),
            title,
            content,
        })
    }
}
