//! Supabase PostgREST client.
//!
//! `GET {supabase_url}/rest/v1/{table}?select=*&slug=eq.{slug}&limit=2`
//!
//! Two rows are requested so a duplicated slug is detected instead of
//! silently picking one.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use super::{PageRecord, PageStore, StoreError, single_row};
use crate::config::Config;

/// HTTP client for a Supabase project's REST endpoint.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: reqwest::Client,
    rest_url: String,
}

impl RestStore {
    /// Create a client for `supabase_url` authenticating with `api_key`.
    ///
    /// An empty key sends no auth headers (useful against a local PostgREST).
    pub fn new(supabase_url: &str, api_key: &str, timeout: Duration) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        if !api_key.is_empty()
            && let (Ok(key), Ok(bearer)) = (
                HeaderValue::from_str(api_key),
                HeaderValue::from_str(&format!("Bearer {api_key}")),
            )
        {
            headers.insert("apikey", key);
            headers.insert(AUTHORIZATION, bearer);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            rest_url: format!("{}/rest/v1", supabase_url.trim_end_matches('/')),
        })
    }

    /// Create a client from application configuration.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Self::new(
            &config.supabase_url,
            &config.supabase_anon_key,
            config.store_timeout,
        )
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.rest_url)
    }
}

#[async_trait]
impl PageStore for RestStore {
    fn name(&self) -> &'static str {
        "postgrest"
    }

    async fn fetch_page(&self, table: &str, slug: &str) -> Result<Option<PageRecord>, StoreError> {
        let filter = format!("eq.{slug}");

        let response = self
            .client
            .get(self.table_url(table))
            .query(&[("select", "*"), ("slug", filter.as_str()), ("limit", "2")])
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                body: error_body(&bytes),
            });
        }

        let rows: Vec<PageRecord> = serde_json::from_slice(&bytes)?;
        single_row(rows, table, slug)
    }
}

/// Keep the error payload as JSON when possible so the debug page can show it verbatim.
fn error_body(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
