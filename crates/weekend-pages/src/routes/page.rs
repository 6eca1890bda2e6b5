//! Main landing page route handler.
//!
//! Handles `GET /{slug}`. The slug is used exactly as received.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::PageError;
use crate::render;
use crate::resolve::{self, ResolveOutcome};
use crate::state::AppState;

/// Handle a landing page request.
///
/// 1. Dispatches `.json` suffixes to the JSON handler
/// 2. Resolves the slug over the configured tables
/// 3. Renders the page, a 404, or (debug mode only) a diagnostic page
pub async fn page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, PageError> {
    if let Some(bare) = slug.strip_suffix(".json") {
        if bare.is_empty() {
            return Err(PageError::NotFound(slug));
        }
        return super::json::json_handler_inner(&state, bare).await;
    }

    let outcome = resolve::resolve(state.store.as_ref(), &state.config.tables, &slug).await;

    match outcome {
        ResolveOutcome::Found { record, table } => {
            tracing::debug!(slug = %slug, table = %table, "rendering page");
            let html = render::page::render(&record, &state.config).into_string();
            Ok(build_response(html))
        }
        ResolveOutcome::NotFound => Err(PageError::NotFound(slug)),
        ResolveOutcome::FetchError { table, error } => {
            if state.config.debug_mode {
                let html = render::diagnostic::render(&slug, &table, &error).into_string();
                Ok(diagnostic_response(html))
            } else {
                Err(PageError::Store(error))
            }
        }
    }
}

/// Build an HTTP response with HTML content and security headers.
fn build_response(html: String) -> Response {
    let mut headers = security_headers();

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    (StatusCode::OK, headers, html).into_response()
}

/// Diagnostic pages are never cached.
fn diagnostic_response(html: String) -> Response {
    let mut headers = security_headers();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    (StatusCode::OK, headers, html).into_response()
}

fn security_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    headers
}
