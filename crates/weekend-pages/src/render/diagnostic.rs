//! Debug diagnostic page for failed lookups.
//!
//! Only served when debug mode is on. Shows the raw store error and the
//! (absent) row as pretty-printed JSON.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::components::ERROR_CSS;
use crate::store::StoreError;

/// Render the diagnostic page for a lookup of `slug` that failed in `table`.
pub fn render(slug: &str, table: &str, error: &StoreError) -> Markup {
    let error_json = serde_json::json!({
        "table": table,
        "message": error.to_string(),
        "detail": error.detail(),
    });
    let error_pretty =
        serde_json::to_string_pretty(&error_json).unwrap_or_else(|_| error_json.to_string());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Debug – " (slug) }
                meta name="robots" content="noindex";
                style { (PreEscaped(ERROR_CSS)) }
            }
            body {
                main class="debug" {
                    h1 { "Debug: " (slug) }
                    p { "The page lookup failed. This view is only served in debug mode." }
                    h2 { "Error" }
                    pre { (error_pretty) }
                    h2 { "Row" }
                    pre class="row" { "null" }
                }
            }
        }
    }
}
