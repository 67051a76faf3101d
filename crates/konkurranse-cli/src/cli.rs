//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use konkurranse_domain::ManualOverrides;
use std::path::PathBuf;

/// Konkurranseguiden CLI - Analyze and keep track of Norwegian competitions.
#[derive(Debug, Parser)]
#[command(name = "konkurranse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON file holding saved competitions
    #[arg(short, long, global = true, env = "KONKURRANSE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// OpenAI API key; heuristics only when absent
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze competition text from a file or stdin
    Analyze(AnalyzeArgs),

    /// Fetch a competition page and analyze it
    Scrape(ScrapeArgs),

    /// List saved competitions
    List(ListArgs),

    /// Delete a saved competition
    Delete(DeleteArgs),
}

/// Values that replace extracted fields.
#[derive(Debug, Clone, Default, Args)]
pub struct OverrideArgs {
    /// Competition title
    #[arg(long)]
    pub title: Option<String>,

    /// Organizer name
    #[arg(long)]
    pub organizer: Option<String>,

    /// Prize description
    #[arg(long)]
    pub prize: Option<String>,

    /// Deadline (YYYY-MM-DD, DD.MM.YYYY or "15. oktober 2025")
    #[arg(long)]
    pub deadline: Option<String>,

    /// Category (technology, travel, gaming, sports, food, other)
    #[arg(long)]
    pub category: Option<String>,

    /// Competition type
    #[arg(long = "type")]
    pub kind: Option<String>,
}

impl From<OverrideArgs> for ManualOverrides {
    fn from(args: OverrideArgs) -> Self {
        ManualOverrides {
            title: args.title,
            organizer: args.organizer,
            prize: args.prize,
            deadline: args.deadline,
            category: args.category,
            kind: args.kind,
        }
    }
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// URL the text was taken from
    #[arg(short, long)]
    pub url: String,

    /// Read the text from this file instead of stdin
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Save the result to the data file
    #[arg(short, long)]
    pub save: bool,
}

/// Arguments for the scrape command.
#[derive(Debug, Parser)]
pub struct ScrapeArgs {
    /// Competition page URL
    pub url: String,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Save the result to the data file
    #[arg(short, long)]
    pub save: bool,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Only show this category
    #[arg(long)]
    pub category: Option<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the delete command.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Competition id
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
