//! Slug resolution over the configured table fallback chain.
//!
//! Tables are tried in order. The first table holding the slug wins; a
//! failed lookup stops the chain at once and is never retried.

use crate::store::{PageRecord, PageStore, StoreError};

/// The terminal state of a slug lookup.
#[derive(Debug)]
pub enum ResolveOutcome {
    /// Exactly one record matched.
    Found {
        /// The matching record.
        record: PageRecord,
        /// Table it was found in.
        table: String,
    },

    /// Every table answered and none held the slug.
    NotFound,

    /// A lookup failed.
    FetchError {
        /// Table whose lookup failed.
        table: String,
        /// The underlying store error.
        error: StoreError,
    },
}

/// Look `slug` up in each of `tables` in turn.
///
/// The slug is passed to the store exactly as received.
pub async fn resolve(store: &dyn PageStore, tables: &[String], slug: &str) -> ResolveOutcome {
    for table in tables {
        tracing::debug!(store = store.name(), table = %table, slug = %slug, "looking up page");

        match store.fetch_page(table, slug).await {
            Ok(Some(record)) => {
                return ResolveOutcome::Found {
                    record,
                    table: table.clone(),
                };
            }
            Ok(None) => continue,
            Err(error) => {
                tracing::error!(
                    store = store.name(),
                    table = %table,
                    slug = %slug,
                    error = %error,
                    "page lookup failed"
                );
                return ResolveOutcome::FetchError {
                    table: table.clone(),
                    error,
                };
            }
        }
    }

    tracing::debug!(slug = %slug, "page not found in any table");
    ResolveOutcome::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn record(slug: &str, title: &str) -> PageRecord {
        PageRecord {
            slug: slug.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn tables() -> Vec<String> {
        vec!["primary".to_string(), "fallback".to_string()]
    }

    #[tokio::test]
    async fn found_in_first_table() {
        let store = MemoryStore::new()
            .with_record("primary", record("brunch", "Primary"))
            .with_record("fallback", record("brunch", "Fallback"));

        match resolve(&store, &tables(), "brunch").await {
            ResolveOutcome::Found { record, table } => {
                assert_eq!(record.title, "Primary");
                assert_eq!(table, "primary");
            }
            other => panic!("expected Found, got {other:?}"),
        }
        assert_eq!(store.queried_tables(), vec!["primary"]);
    }

    #[tokio::test]
    async fn falls_back_to_second_table() {
        let store = MemoryStore::new().with_record("fallback", record("brunch", "Fallback"));

        match resolve(&store, &tables(), "brunch").await {
            ResolveOutcome::Found { record, table } => {
                assert_eq!(record.title, "Fallback");
                assert_eq!(table, "fallback");
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn not_found_when_no_table_matches() {
        let store = MemoryStore::new().with_record("primary", record("other", "Other"));

        assert!(matches!(
            resolve(&store, &tables(), "brunch").await,
            ResolveOutcome::NotFound
        ));
        assert_eq!(store.queried_tables(), vec!["primary", "fallback"]);
    }

    #[tokio::test]
    async fn error_stops_the_chain() {
        let store = MemoryStore::new()
            .with_failure("primary", 401, serde_json::json!({"message": "bad key"}))
            .with_record("fallback", record("brunch", "Fallback"));

        match resolve(&store, &tables(), "brunch").await {
            ResolveOutcome::FetchError { table, error } => {
                assert_eq!(table, "primary");
                assert!(matches!(error, StoreError::Api { status: 401, .. }));
            }
            other => panic!("expected FetchError, got {other:?}"),
        }
        assert_eq!(store.queried_tables(), vec!["primary"]);
    }

    #[tokio::test]
    async fn error_in_fallback_after_miss() {
        let store = MemoryStore::new().with_failure("fallback", 500, serde_json::json!("down"));

        assert!(matches!(
            resolve(&store, &tables(), "brunch").await,
            ResolveOutcome::FetchError { ref table, .. } if table == "fallback"
        ));
    }

    #[tokio::test]
    async fn duplicate_rows_are_a_fetch_error() {
        let store = MemoryStore::new()
            .with_record("primary", record("brunch", "One"))
            .with_record("primary", record("brunch", "Two"));

        assert!(matches!(
            resolve(&store, &tables(), "brunch").await,
            ResolveOutcome::FetchError {
                error: StoreError::Ambiguous { .. },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn slug_is_not_normalized() {
        let store = MemoryStore::new().with_record("primary", record("brunch", "Brunch"));

        assert!(matches!(
            resolve(&store, &tables(), "Brunch").await,
            ResolveOutcome::NotFound
        ));
    }
}
