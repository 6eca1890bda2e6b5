//! In-process row store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{PageRecord, PageStore, StoreError, single_row};

/// Tables held in memory, with optional per-table failures.
///
/// Records every table it is asked about so callers can check which
/// lookups actually happened.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: HashMap<String, Vec<PageRecord>>,
    failures: HashMap<String, (u16, serde_json::Value)>,
    queried: Arc<Mutex<Vec<String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to `table`.
    pub fn with_record(mut self, table: &str, record: PageRecord) -> Self {
        self.tables.entry(table.to_string()).or_default().push(record);
        self
    }

    /// Make every lookup against `table` fail with the given status and payload.
    pub fn with_failure(mut self, table: &str, status: u16, body: serde_json::Value) -> Self {
        self.failures.insert(table.to_string(), (status, body));
        self
    }

    /// Tables looked up so far, in call order.
    pub fn queried_tables(&self) -> Vec<String> {
        self.queried
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PageStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn fetch_page(&self, table: &str, slug: &str) -> Result<Option<PageRecord>, StoreError> {
        if let Ok(mut queried) = self.queried.lock() {
            queried.push(table.to_string());
        }

        if let Some((status, body)) = self.failures.get(table) {
            return Err(StoreError::Api {
                status: *status,
                body: body.clone(),
            });
        }

        let rows: Vec<PageRecord> = self
            .tables
            .get(table)
            .map(|rows| rows.iter().filter(|r| r.slug == slug).cloned().collect())
            .unwrap_or_default();

        single_row(rows, table, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str) -> PageRecord {
        PageRecord {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn finds_exact_slug() {
        let store = MemoryStore::new().with_record("pages", record("a"));
        assert_eq!(store.fetch_page("pages", "a").await.unwrap(), Some(record("a")));
    }

    #[tokio::test]
    async fn slug_match_is_case_sensitive() {
        let store = MemoryStore::new().with_record("pages", record("a"));
        assert_eq!(store.fetch_page("pages", "A").await.unwrap(), None);
    }

    #[tokio::test]
    async fn unknown_table_is_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.fetch_page("missing", "a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn failure_is_reported() {
        let store = MemoryStore::new().with_failure("pages", 500, serde_json::json!("boom"));
        let err = store.fetch_page("pages", "a").await.unwrap_err();
        assert!(matches!(err, StoreError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn records_queried_tables() {
        let store = MemoryStore::new();
        let _ = store.fetch_page("one", "a").await;
        let _ = store.fetch_page("two", "a").await;
        assert_eq!(store.queried_tables(), vec!["one", "two"]);
    }
}
