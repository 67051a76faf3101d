//! List command implementation.

use crate::cli::ListArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use konkurranse_domain::{Category, CompetitionRecord, CompetitionStore};
use konkurranse_store::JsonFileStore;
use std::path::Path;

/// Execute the list command.
pub async fn execute_list(args: ListArgs, data_file: &Path, formatter: &Formatter) -> Result<()> {
    let category = match &args.category {
        Some(label) => Some(
            Category::from_label(label)
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown category '{}'", label)))?,
        ),
        None => None,
    };

    let store = JsonFileStore::open(data_file).await?;
    let records = select(store.load_all().await?, category, args.limit);

    println!("{}", formatter.format_records(&records)?);

    Ok(())
}

/// Filter by category and cap the count, keeping newest-first order.
fn select(
    records: Vec<CompetitionRecord>,
    category: Option<Category>,
    limit: Option<usize>,
) -> Vec<CompetitionRecord> {
    records
        .into_iter()
        .filter(|record| category.is_none_or(|c| record.category == c))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn record(id: i64, category: Category) -> CompetitionRecord {
        CompetitionRecord {
            id,
            title: format!("Konkurranse {}", id),
            description: "Competition from Kiwi. See the link for full details.".to_string(),
            prize: "Gavekort".to_string(),
            organizer: "Kiwi".to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            category,
            image: category.emoji().to_string(),
            kind: "free".to_string(),
            added_date: Utc.timestamp_millis_opt(id).unwrap(),
            source_url: "https://kiwi.no".to_string(),
            ai_parsed: false,
        }
    }

    #[test]
    fn test_select_by_category() {
        let records = vec![
            record(3, Category::Food),
            record(2, Category::Travel),
            record(1, Category::Food),
        ];

        let ids: Vec<i64> = select(records, Some(Category::Food), None)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_select_with_limit() {
        let records = vec![
            record(3, Category::Food),
            record(2, Category::Travel),
            record(1, Category::Food),
        ];

        let ids: Vec<i64> = select(records, None, Some(2)).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = ListArgs {
            category: Some("hagearbeid".to_string()),
            limit: None,
        };
        let formatter = Formatter::new(crate::config::OutputFormat::Quiet, false);

        let result = execute_list(args, &dir.path().join("c.json"), &formatter).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
