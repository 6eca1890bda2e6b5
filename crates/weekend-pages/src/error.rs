//! Error types for the pages service.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service. Store failure detail is
//! logged, never shown; the debug diagnostic page is a separate path.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

use crate::store::StoreError;

/// Pages service error type.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No table holds the requested slug.
    #[error("not found: {0}")]
    NotFound(String),

    /// The row store lookup failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error (serialization, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                "Page Not Found",
                "We couldn't find the page you were looking for.",
            ),
            Self::Store(err) => {
                tracing::error!(error = %err, "row store error");
                (
                    StatusCode::BAD_GATEWAY,
                    "Temporarily Unavailable",
                    "This page is temporarily unavailable. Please try again later.",
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.",
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to home" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
