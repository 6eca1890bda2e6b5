//! Shared HTML components used across all pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};

use crate::config::CtaLinks;

/// Inline CSS for landing pages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fbf8f3;--fg:#1d1b18;--fg2:#5a554d;--fg3:#9a948a;--accent:#e2573b;--accent-hover:#c4452c;--border:rgba(226,87,59,.18);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:system-ui,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem 4rem}
main{max-width:800px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}

.site-header{display:flex;align-items:center;justify-content:space-between;margin-bottom:2.5rem}
.brand{font-weight:800;font-size:1.1rem;letter-spacing:-.02em;color:var(--fg)}
.brand:hover{text-decoration:none;color:var(--accent)}

.subtitle{font-size:.85rem;font-weight:600;color:var(--fg3);text-transform:uppercase;letter-spacing:.06em;margin-bottom:.5rem}
.page-title{font-size:2rem;font-weight:700;line-height:1.25;letter-spacing:-.02em;margin-bottom:1.25rem}

.content{font-size:1.05rem;line-height:1.75;color:var(--fg)}
.content.plain{white-space:pre-wrap;word-break:break-word}
.content h1,.content h2,.content h3{font-weight:700;margin:1.5rem 0 .75rem;letter-spacing:-.01em}
.content h2{font-size:1.3rem}
.content h3{font-size:1.1rem}
.content p{margin:.75rem 0}
.content ul,.content ol{margin:.75rem 0;padding-left:1.5rem}
.content li{margin:.3rem 0}
.content blockquote{border-left:3px solid var(--border);padding:.5rem 0 .5rem 1rem;margin:.75rem 0;color:var(--fg2)}
.content img{max-width:100%;border-radius:6px}

.cta{margin-top:3rem;padding:1.5rem;border:1px solid var(--border);border-radius:12px;text-align:center}
.cta h2{font-size:1.2rem;font-weight:700;margin-bottom:1rem}
.cta-links{display:flex;flex-wrap:wrap;justify-content:center;gap:.75rem}
.cta-link{display:inline-flex;align-items:center;padding:.6rem 1.2rem;border-radius:8px;font-size:.95rem;font-weight:600;border:1px solid var(--accent)}
.cta-link:hover{text-decoration:none;background:var(--border)}
.cta-link.primary{background:var(--accent);color:#fff}
.cta-link.primary:hover{background:var(--accent-hover)}

.footer{text-align:center;margin-top:2rem;font-size:.8rem;color:var(--fg3)}

@media(prefers-color-scheme:dark){
:root{--bg:#141210;--fg:#ece7df;--fg2:#b3aca1;--fg3:#7d776d;--accent:#ff7a5c;--accent-hover:#ff9a82;--border:rgba(255,122,92,.22)}
}
"#;

/// Inline CSS for error and diagnostic pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:system-ui,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fbf8f3;color:#1d1b18;padding:1rem}
.error-page{text-align:center;max-width:420px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#5a554d;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#e2573b}
.debug{max-width:800px;width:100%;align-self:flex-start;margin:40px auto}
.debug h1{font-size:1.5rem;margin-bottom:1rem}
.debug h2{font-size:1.1rem;margin:1.25rem 0 .5rem}
.debug pre{background:#111;color:#0f0;padding:1rem;border-radius:8px;font-size:13px;overflow-x:auto;font-family:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
.debug pre.row{color:#0ff}
@media(prefers-color-scheme:dark){
body{background:#141210;color:#ece7df}
.error-page p{color:#b3aca1}
.error-page a{color:#ff7a5c}
}
"#;

/// Content-Security-Policy header value.
///
/// Pages are script-free: inline styles only, HTTPS images.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src https: data:; form-action 'none'; frame-ancestors 'none'; base-uri 'none'";

/// Open Graph metadata for a page.
pub struct OpenGraphData<'a> {
    /// OG title.
    pub title: &'a str,
    /// OG description.
    pub description: &'a str,
    /// OG type (e.g., "article", "website").
    pub og_type: &'a str,
}

/// Render the full HTML page shell with `<head>`, OG tags, and body content.
pub fn page_shell(
    title: &str,
    description: &str,
    canonical_url: &str,
    og: OpenGraphData<'_>,
    body_content: Markup,
    site_name: &str,
) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                link rel="canonical" href=(canonical_url);

                // Open Graph
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:url" content=(canonical_url);
                meta property="og:site_name" content=(site_name);
                meta property="og:type" content=(og.og_type);

                // Twitter Card
                meta name="twitter:card" content="summary";
                meta name="twitter:title" content=(og.title);
                meta name="twitter:description" content=(og.description);

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
                footer class="footer" {
                    "© " (site_name)
                }
            }
        }
    }
}

/// Render the site header with the brand link.
pub fn site_header(site_name: &str, home_url: &str) -> Markup {
    html! {
        header class="site-header" {
            a class="brand" href=(home_url) { (site_name) }
        }
    }
}

/// Render the call-to-action block.
///
/// Each link appears only when its target is configured and is an
/// http(s) URL; the whole block is omitted when no link remains.
pub fn cta_block(links: &CtaLinks, site_name: &str) -> Markup {
    let entries: Vec<(&str, &str, bool)> = [
        (links.web_app_url.as_deref(), "Open the web app", true),
        (links.ios_app_url.as_deref(), "Download for iOS", false),
        (links.marketing_url.as_deref(), "Learn more", false),
    ]
    .into_iter()
    .filter_map(|(url, label, primary)| {
        url.filter(|u| is_safe_url(u)).map(|u| (u, label, primary))
    })
    .collect();

    html! {
        @if !entries.is_empty() {
            section class="cta" {
                h2 { "Plan your weekend with " (site_name) }
                div class="cta-links" {
                    @for (url, label, primary) in &entries {
                        @if *primary {
                            a class="cta-link primary" href=(url) rel="noopener" { (label) }
                        } @else {
                            a class="cta-link" href=(url) rel="noopener" { (label) }
                        }
                    }
                }
            }
        }
    }
}

/// Check if a URL is safe to use in `href` attributes.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// First `max_chars` characters of `s`, without any ellipsis.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
