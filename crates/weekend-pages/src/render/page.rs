//! Landing page renderer: metadata derivation and page body.

use maud::{Markup, html};
use serde::Serialize;

use super::components::{OpenGraphData, cta_block, page_shell, site_header, truncate_chars};
use super::content::render_content;
use crate::config::Config;
use crate::store::PageRecord;

/// Separator between title and subtitle parts.
pub const SEPARATOR: &str = " · ";

/// Characters of `content` used when a record has no meta description.
pub const DESCRIPTION_CHARS: usize = 160;

/// Derived page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Document title, e.g. "Brunch Taipei · Taipei · The Weekend Club".
    pub title: String,
    /// Meta/OG description.
    pub description: String,
    /// Canonical and `og:url` URL.
    pub canonical_url: String,
}

impl PageMeta {
    /// Derive metadata for `record`.
    pub fn derive(record: &PageRecord, config: &Config) -> Self {
        Self {
            title: compose_title(record, &config.site_name),
            description: compose_description(record),
            canonical_url: canonical_url(&config.base_url, &record.slug),
        }
    }
}

/// `title`, then the city when present, then the brand.
pub fn compose_title(record: &PageRecord, site_name: &str) -> String {
    let mut parts = vec![record.title.as_str()];
    parts.extend(record.city());
    parts.push(site_name);
    parts.join(SEPARATOR)
}

/// The meta description, else the head of `content`, else the title.
pub fn compose_description(record: &PageRecord) -> String {
    record
        .meta_description()
        .map(str::to_string)
        .or_else(|| {
            record
                .content()
                .map(|c| truncate_chars(c, DESCRIPTION_CHARS).to_string())
        })
        .unwrap_or_else(|| record.title.clone())
}

/// `{base_url}/{slug}`.
pub fn canonical_url(base_url: &str, slug: &str) -> String {
    format!("{}/{slug}", base_url.trim_end_matches('/'))
}

/// The present subset of city, persona and theme, or `None` when all are absent.
pub fn compose_subtitle(record: &PageRecord) -> Option<String> {
    let parts: Vec<&str> = [record.city(), record.persona(), record.theme()]
        .into_iter()
        .flatten()
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(SEPARATOR))
    }
}

/// Render a complete landing page for a found record.
pub fn render(record: &PageRecord, config: &Config) -> Markup {
    let meta = PageMeta::derive(record, config);
    let subtitle = compose_subtitle(record);

    let og = OpenGraphData {
        title: &meta.title,
        description: &meta.description,
        og_type: "article",
    };

    let body = html! {
        (site_header(&config.site_name, &config.base_url))
        article {
            @if let Some(subtitle) = &subtitle {
                p class="subtitle" { (subtitle) }
            }
            h1 class="page-title" { (record.title) }
            @if let Some(content) = record.content() {
                (render_content(content, config.content_policy))
            }
        }
        (cta_block(&config.cta, &config.site_name))
    };

    page_shell(
        &meta.title,
        &meta.description,
        &meta.canonical_url,
        og,
        body,
        &config.site_name,
    )
}
