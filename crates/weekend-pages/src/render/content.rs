//! Record content rendering under the configured [`ContentPolicy`].
//!
//! `content` comes from the row store with no guarantee that it was
//! sanitized upstream, so the default policy escapes it. Markdown is
//! rendered with pulldown-cmark after dropping every raw HTML event and
//! unwrapping links or images whose target is not http(s) or site-relative.
//! Verbatim injection is reserved for content written in a trusted editor.

use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html as md_html};

use super::components::is_safe_url;
use crate::config::ContentPolicy;

/// Render record content as the page body block.
pub fn render_content(content: &str, policy: ContentPolicy) -> Markup {
    match policy {
        ContentPolicy::Escape => html! {
            div class="content plain" { (content) }
        },
        ContentPolicy::Markdown => html! {
            div class="content" { (PreEscaped(render_markdown(content))) }
        },
        ContentPolicy::TrustedHtml => html! {
            div class="content" { (PreEscaped(content)) }
        },
    }
}

/// Render markdown text to HTML with raw HTML and unsafe link targets removed.
fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // One entry per open link/image: whether its start tag was kept.
    let mut open_links: Vec<bool> = Vec::new();
    let parser = Parser::new_ext(markdown, options).filter(move |event| match event {
        Event::Html(_) | Event::InlineHtml(_) => false,
        Event::Start(Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. }) => {
            let keep = is_allowed_target(dest_url);
            open_links.push(keep);
            keep
        }
        Event::End(TagEnd::Link | TagEnd::Image) => open_links.pop().unwrap_or(true),
        _ => true,
    });

    let mut html_output = String::with_capacity(markdown.len() * 2);
    md_html::push_html(&mut html_output, parser);
    html_output
}

/// Absolute http(s) URLs and same-site paths or fragments.
fn is_allowed_target(url: &str) -> bool {
    is_safe_url(url) || url.starts_with('/') || url.starts_with('#')
}
