//! JSON file store tests against a real file system

use chrono::{NaiveDate, TimeZone, Utc};
use konkurranse_domain::{Category, CompetitionRecord, CompetitionStore};
use konkurranse_store::{JsonFileStore, StoreError};
use std::sync::Arc;
use tempfile::TempDir;

fn record(id: i64) -> CompetitionRecord {
    CompetitionRecord {
        id,
        title: format!("Konkurranse nummer {}", id),
        description: "Competition from Ikea. See the link for full details.".to_string(),
        prize: "Gavekort på 500 kr".to_string(),
        organizer: "Ikea".to_string(),
        deadline: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
        category: Category::Other,
        image: "🏠".to_string(),
        kind: "free".to_string(),
        added_date: Utc.timestamp_millis_opt(id).unwrap(),
        source_url: "https://www.ikea.com/no".to_string(),
        ai_parsed: true,
    }
}

#[tokio::test]
async fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("competitions.json"))
        .await
        .unwrap();

    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_open_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("nested").join("competitions.json");

    let store = JsonFileStore::open(&path).await.unwrap();
    store.append(record(1)).await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("competitions.json");

    {
        let store = JsonFileStore::open(&path).await.unwrap();
        store.append(record(1)).await.unwrap();
        store.append(record(2)).await.unwrap();
    }

    let store = JsonFileStore::open(&path).await.unwrap();
    let records = store.load_all().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], record(2));
    assert_eq!(records[1], record(1));
}

#[tokio::test]
async fn test_file_is_pretty_camel_case_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("competitions.json");
    let store = JsonFileStore::open(&path).await.unwrap();
    store.append(record(7)).await.unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    assert!(data.contains("\n  {"));
    assert!(data.contains("\"sourceUrl\": \"https://www.ikea.com/no\""));
    assert!(data.contains("\"aiParsed\": true"));
    assert!(data.contains("\"type\": \"free\""));
}

#[tokio::test]
async fn test_delete_by_id() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("competitions.json"))
        .await
        .unwrap();
    store.save_all(&[record(1), record(2), record(3)]).await.unwrap();

    assert!(store.delete(2).await.unwrap());
    assert!(!store.delete(42).await.unwrap());

    let ids: Vec<i64> = store.load_all().await.unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("competitions.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonFileStore::open(&path).await.unwrap();
    assert!(matches!(
        store.load_all().await,
        Err(StoreError::InvalidData(_))
    ));
}

#[tokio::test]
async fn test_concurrent_appends_keep_every_record() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(
        JsonFileStore::open(dir.path().join("competitions.json"))
            .await
            .unwrap(),
    );

    let handles: Vec<_> = (1..=20)
        .map(|id| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.append(record(id)).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.load_all().await.unwrap().len(), 20);
}
