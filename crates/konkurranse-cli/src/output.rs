//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use konkurranse_domain::CompetitionRecord;
use konkurranse_gatekeeper::truncate_chars;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Widest title shown in list tables.
const TABLE_TITLE_CHARS: usize = 40;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of competitions.
    pub fn format_records(&self, records: &[CompetitionRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Table => Ok(self.records_table(records)),
            OutputFormat::Quiet => Ok(ids(records)),
        }
    }

    /// Format one competition with every field.
    pub fn format_record(&self, record: &CompetitionRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Table => Ok(self.record_table(record)),
            OutputFormat::Quiet => Ok(record.id.to_string()),
        }
    }

    fn records_table(&self, records: &[CompetitionRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No competitions found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "", "Title", "Organizer", "Deadline", "Category", "AI"]);

        for record in records {
            builder.push_record([
                record.id.to_string(),
                record.image.clone(),
                truncate_chars(&record.title, TABLE_TITLE_CHARS),
                record.organizer.clone(),
                record.deadline.to_string(),
                record.category.as_str().to_string(),
                if record.ai_parsed { "yes" } else { "no" }.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn record_table(&self, record: &CompetitionRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["ID".to_string(), record.id.to_string()]);
        builder.push_record([
            "Title".to_string(),
            format!("{} {}", record.image, record.title),
        ]);
        builder.push_record(["Organizer".to_string(), record.organizer.clone()]);
        builder.push_record(["Prize".to_string(), record.prize.clone()]);
        builder.push_record(["Deadline".to_string(), record.deadline.to_string()]);
        builder.push_record([
            "Category".to_string(),
            format!("{} {}", record.category.emoji(), record.category.as_str()),
        ]);
        builder.push_record(["Type".to_string(), record.kind.clone()]);
        builder.push_record(["Description".to_string(), record.description.clone()]);
        builder.push_record(["Source".to_string(), record.source_url.clone()]);
        builder.push_record([
            "Analyzed by".to_string(),
            if record.ai_parsed { "AI" } else { "heuristics" }.to_string(),
        ]);

        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn ids(records: &[CompetitionRecord]) -> String {
    records
        .iter()
        .map(|r| r.id.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
