//! JSON endpoint for page records.
//!
//! Serves the record and its derived metadata at `GET /{slug}.json`.
//! Designed for LLM agents and programmatic consumers.
//!
//! Format:
//! ```json
//! {
//!   "record": { "slug": "...", "title": "...", "city": null, ... },
//!   "meta": { "title": "...", "description": "...", "canonical_url": "..." }
//! }
//! ```

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::PageError;
use crate::render::PageMeta;
use crate::resolve::{self, ResolveOutcome};
use crate::state::AppState;

/// Inner handler called from the page handler when `.json` suffix is detected.
pub async fn json_handler_inner(state: &AppState, slug: &str) -> Result<Response, PageError> {
    let outcome = resolve::resolve(state.store.as_ref(), &state.config.tables, slug).await;

    let (body, cacheable) = match outcome {
        ResolveOutcome::Found { record, .. } => {
            let meta = PageMeta::derive(&record, &state.config);
            let body = serde_json::json!({
                "record": record,
                "meta": meta,
            });
            (body, true)
        }
        ResolveOutcome::NotFound => return Err(PageError::NotFound(slug.to_string())),
        ResolveOutcome::FetchError { table, error } => {
            if !state.config.debug_mode {
                return Err(PageError::Store(error));
            }
            let body = serde_json::json!({
                "record": null,
                "error": {
                    "table": table,
                    "message": error.to_string(),
                    "detail": error.detail(),
                },
            });
            (body, false)
        }
    };

    let json_string =
        serde_json::to_string_pretty(&body).map_err(|e| PageError::Internal(e.into()))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    if !cacheable {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }

    Ok((StatusCode::OK, headers, json_string).into_response())
}
