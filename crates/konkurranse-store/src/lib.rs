//! Konkurranseguiden Storage Layer
//!
//! Implements the `CompetitionStore` trait over a JSON file, plus an
//! in-memory store for tests.
//!
//! Records are kept newest first: `append` puts the new record in front.
//!
//! # Examples
//!
//! ```no_run
//! use konkurranse_domain::CompetitionStore;
//! use konkurranse_store::JsonFileStore;
//!
//! # async fn example() -> Result<(), konkurranse_store::StoreError> {
//! let store = JsonFileStore::open("data/competitions.json").await?;
//! let records = store.load_all().await?;
//! println!("{} competitions", records.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

use async_trait::async_trait;
use konkurranse_domain::{CompetitionRecord, CompetitionStore};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not a JSON list of records
    #[error("Invalid data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// JSON-file implementation of CompetitionStore
///
/// The whole list is read and rewritten on every change. File access is
/// serialized, so concurrent appends in one process never lose a record.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store at `path`, creating its parent directory
    ///
    /// The file itself is created on the first save.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        info!("Using data file {}", path.display());

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Location of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<CompetitionRecord>, StoreError> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    async fn write(&self, records: &[CompetitionRecord]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, data).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl CompetitionStore for JsonFileStore {
    type Error = StoreError;

    async fn load_all(&self) -> Result<Vec<CompetitionRecord>, Self::Error> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    async fn save_all(&self, records: &[CompetitionRecord]) -> Result<(), Self::Error> {
        let _guard = self.lock.lock().await;
        self.write(records).await
    }

    async fn append(&self, record: CompetitionRecord) -> Result<(), Self::Error> {
        let _guard = self.lock.lock().await;
        let mut records = self.read().await?;
        records.insert(0, record);
        self.write(&records).await
    }

    async fn delete(&self, id: i64) -> Result<bool, Self::Error> {
        let _guard = self.lock.lock().await;
        let mut records = self.read().await?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.write(&records).await?;
        Ok(true)
    }
}

/// In-memory CompetitionStore
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<CompetitionRecord>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records`, newest first
    pub fn with_records(records: Vec<CompetitionRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait]
impl CompetitionStore for MemoryStore {
    type Error = StoreError;

    async fn load_all(&self) -> Result<Vec<CompetitionRecord>, Self::Error> {
        Ok(self.records.lock().await.clone())
    }

    async fn save_all(&self, records: &[CompetitionRecord]) -> Result<(), Self::Error> {
        *self.records.lock().await = records.to_vec();
        Ok(())
    }

    async fn append(&self, record: CompetitionRecord) -> Result<(), Self::Error> {
        self.records.lock().await.insert(0, record);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, Self::Error> {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|record| record.id != id);
        Ok(records.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use konkurranse_domain::Category;

    fn record(id: i64, title: &str) -> CompetitionRecord {
        CompetitionRecord {
            id,
            title: title.to_string(),
            description: "Competition from Kiwi. See the link for full details.".to_string(),
            prize: "Gavekort".to_string(),
            organizer: "Kiwi".to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            category: Category::Food,
            image: "🍕".to_string(),
            kind: "free".to_string(),
            added_date: Utc.timestamp_millis_opt(id).unwrap(),
            source_url: "https://kiwi.no".to_string(),
            ai_parsed: false,
        }
    }

    #[tokio::test]
    async fn test_memory_store_append_is_newest_first() {
        let store = MemoryStore::new();
        store.append(record(1, "Første")).await.unwrap();
        store.append(record(2, "Andre")).await.unwrap();

        let records = store.load_all().await.unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_memory_store_delete() {
        let store = MemoryStore::with_records(vec![record(1, "En"), record(2, "To")]);

        assert!(store.delete(1).await.unwrap());
        assert!(!store.delete(1).await.unwrap());
        assert_eq!(store.load_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_memory_store_save_all_replaces() {
        let store = MemoryStore::with_records(vec![record(1, "En")]);
        store.save_all(&[record(5, "Fem"), record(6, "Seks")]).await.unwrap();

        let ids: Vec<i64> = store.load_all().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 6]);
    }
}
