//! Row-store layer: the page record model and the lookup contract.
//!
//! The service never writes. A lookup is a single equality filter on
//! `slug` against one table and yields zero or one [`PageRecord`].
//!
//! # Implementations
//!
//! - [`RestStore`] - Supabase PostgREST over HTTP
//! - [`MemoryStore`] - In-process tables for tests and local previews

mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A landing page row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRecord {
    /// URL slug, unique per table.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// City qualifier (e.g., "Taipei").
    #[serde(default)]
    pub city: Option<String>,
    /// Audience persona (e.g., "Couples").
    #[serde(default)]
    pub persona: Option<String>,
    /// Theme (e.g., "Brunch").
    #[serde(default)]
    pub theme: Option<String>,
    /// Explicit meta description.
    #[serde(default)]
    pub meta_description: Option<String>,
    /// Long-form body text or markup.
    #[serde(default)]
    pub content: Option<String>,
}

impl PageRecord {
    /// City, if present and not blank.
    pub fn city(&self) -> Option<&str> {
        non_blank(self.city.as_deref())
    }

    /// Persona, if present and not blank.
    pub fn persona(&self) -> Option<&str> {
        non_blank(self.persona.as_deref())
    }

    /// Theme, if present and not blank.
    pub fn theme(&self) -> Option<&str> {
        non_blank(self.theme.as_deref())
    }

    /// Meta description, if present and not blank.
    pub fn meta_description(&self) -> Option<&str> {
        non_blank(self.meta_description.as_deref())
    }

    /// Content, if present and not blank.
    pub fn content(&self) -> Option<&str> {
        non_blank(self.content.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A failed lookup. Zero matching rows is not an error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store returned HTTP {status}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error payload as returned (JSON when parseable, else a string).
        body: serde_json::Value,
    },

    /// The response body was not a list of page rows.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// More than one row matched a slug.
    #[error("multiple rows in '{table}' for slug '{slug}'")]
    Ambiguous {
        /// Table queried.
        table: String,
        /// Slug queried.
        slug: String,
    },
}

impl StoreError {
    /// Raw error detail as JSON, for the debug diagnostic page.
    pub fn detail(&self) -> serde_json::Value {
        match self {
            Self::Request(err) => serde_json::json!({
                "kind": "request",
                "message": err.to_string(),
                "timeout": err.is_timeout(),
                "connect": err.is_connect(),
            }),
            Self::Api { status, body } => serde_json::json!({
                "kind": "api",
                "status": status,
                "body": body,
            }),
            Self::Decode(err) => serde_json::json!({
                "kind": "decode",
                "message": err.to_string(),
            }),
            Self::Ambiguous { table, slug } => serde_json::json!({
                "kind": "ambiguous",
                "table": table,
                "slug": slug,
            }),
        }
    }
}

/// Read-only row store queried by slug.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Human-readable name for this store (used in logs).
    fn name(&self) -> &'static str;

    /// Fetch the row in `table` whose `slug` equals `slug`.
    ///
    /// Returns `Ok(None)` when no row matches, and
    /// [`StoreError::Ambiguous`] when more than one does.
    async fn fetch_page(&self, table: &str, slug: &str) -> Result<Option<PageRecord>, StoreError>;
}

/// Collapse a result set to at most one row.
pub(crate) fn single_row(
    mut rows: Vec<PageRecord>,
    table: &str,
    slug: &str,
) -> Result<Option<PageRecord>, StoreError> {
    if rows.len() > 1 {
        return Err(StoreError::Ambiguous {
            table: table.to_string(),
            slug: slug.to_string(),
        });
    }
    Ok(rows.pop())
}
