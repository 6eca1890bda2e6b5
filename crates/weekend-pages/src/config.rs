//! Application configuration loaded from environment variables.
//!
//! Everything is read and validated once at process start; handlers only
//! ever see the resulting immutable [`Config`].

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};

use crate::render::components::is_safe_url;

/// How a record's `content` field is turned into page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentPolicy {
    /// Render content as escaped plain text.
    #[default]
    Escape,
    /// Render content as Markdown, dropping any raw HTML it contains.
    Markdown,
    /// Inject content verbatim. Only for content from a trusted internal editor.
    TrustedHtml,
}

impl FromStr for ContentPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "escape" => Ok(Self::Escape),
            "markdown" => Ok(Self::Markdown),
            "trusted-html" | "trusted_html" => Ok(Self::TrustedHtml),
            other => bail!("unknown content policy '{other}' (expected escape, markdown or trusted-html)"),
        }
    }
}

/// Outbound call-to-action targets.
#[derive(Debug, Clone)]
pub struct CtaLinks {
    /// Marketing site URL.
    pub marketing_url: Option<String>,
    /// Web app URL.
    pub web_app_url: Option<String>,
    /// iOS App Store / deep link URL. Unset by default.
    pub ios_app_url: Option<String>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Supabase project URL; the PostgREST API lives under `/rest/v1`.
    pub supabase_url: String,

    /// Supabase anon key sent as `apikey` and bearer token. Empty disables both headers.
    pub supabase_anon_key: String,

    /// Tables to look slugs up in, in fallback order.
    pub tables: Vec<String>,

    /// Base URL used for canonical and OpenGraph links.
    pub base_url: String,

    /// Brand name, used as the title suffix and `og:site_name`.
    pub site_name: String,

    /// Call-to-action link targets.
    pub cta: CtaLinks,

    /// Expose raw row-store errors on a diagnostic page instead of a generic 502.
    pub debug_mode: bool,

    /// Policy for rendering record content.
    pub content_policy: ContentPolicy,

    /// Timeout applied to each row-store request.
    pub store_timeout: Duration,
}

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SUPABASE_URL: &str = "http://localhost:54321";
const DEFAULT_TABLES: &str = "seo_pages,seed_pages";
const DEFAULT_BASE_URL: &str = "https://theweekendclub.app";
const DEFAULT_SITE_NAME: &str = "The Weekend Club";
const DEFAULT_MARKETING_URL: &str = "https://theweekendclub.app";
const DEFAULT_WEB_APP_URL: &str = "https://app.theweekendclub.app";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

impl Default for Config {
    /// Local-development defaults, identical to an empty environment.
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            supabase_url: DEFAULT_SUPABASE_URL.to_string(),
            supabase_anon_key: String::new(),
            tables: DEFAULT_TABLES.split(',').map(str::to_string).collect(),
            base_url: DEFAULT_BASE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            cta: CtaLinks {
                marketing_url: Some(DEFAULT_MARKETING_URL.to_string()),
                web_app_url: Some(DEFAULT_WEB_APP_URL.to_string()),
                ios_app_url: None,
            },
            debug_mode: false,
            content_policy: ContentPolicy::default(),
            store_timeout: Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `PAGES_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `SUPABASE_URL`: Supabase project URL (default: "http://localhost:54321")
    /// - `SUPABASE_ANON_KEY`: API key for PostgREST (default: empty)
    /// - `PAGES_TABLES`: Comma-separated lookup tables in fallback order (default: "seo_pages,seed_pages")
    /// - `PAGES_BASE_URL`: Base URL for canonical/OG links (default: "https://theweekendclub.app")
    /// - `PAGES_SITE_NAME`: Brand name (default: "The Weekend Club")
    /// - `MARKETING_SITE_URL`: Marketing CTA target (default: "https://theweekendclub.app")
    /// - `WEB_APP_URL`: Web app CTA target (default: "https://app.theweekendclub.app")
    /// - `IOS_APP_URL`: iOS CTA target (default: unset, link omitted)
    /// - `PAGES_DEBUG`: Show raw fetch errors (default: false)
    /// - `PAGES_CONTENT_POLICY`: escape | markdown | trusted-html (default: escape)
    /// - `PAGES_STORE_TIMEOUT_SECS`: Row-store request timeout (default: 10)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env_or("PAGES_BIND_ADDR", DEFAULT_BIND_ADDR);

        let supabase_url = env_or("SUPABASE_URL", DEFAULT_SUPABASE_URL)
            .trim_end_matches('/')
            .to_string();

        let supabase_anon_key = std::env::var("SUPABASE_ANON_KEY")
            .unwrap_or_default()
            .trim()
            .to_string();

        let tables: Vec<String> = env_or("PAGES_TABLES", DEFAULT_TABLES)
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if tables.is_empty() {
            bail!("PAGES_TABLES must name at least one table");
        }

        let base_url = env_or("PAGES_BASE_URL", DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let site_name = env_or("PAGES_SITE_NAME", DEFAULT_SITE_NAME);

        let cta = CtaLinks {
            marketing_url: Some(env_or("MARKETING_SITE_URL", DEFAULT_MARKETING_URL)),
            web_app_url: Some(env_or("WEB_APP_URL", DEFAULT_WEB_APP_URL)),
            ios_app_url: env_opt("IOS_APP_URL"),
        };
        for (key, url) in [
            ("MARKETING_SITE_URL", cta.marketing_url.as_deref()),
            ("WEB_APP_URL", cta.web_app_url.as_deref()),
            ("IOS_APP_URL", cta.ios_app_url.as_deref()),
        ] {
            if let Some(url) = url
                && !is_safe_url(url)
            {
                bail!("{key} must be an http(s) URL, got '{url}'");
            }
        }

        let debug_mode = match env_opt("PAGES_DEBUG") {
            Some(raw) => parse_bool(&raw).with_context(|| format!("invalid PAGES_DEBUG '{raw}'"))?,
            None => false,
        };

        let content_policy = match env_opt("PAGES_CONTENT_POLICY") {
            Some(raw) => raw.parse()?,
            None => ContentPolicy::default(),
        };

        let store_timeout = match env_opt("PAGES_STORE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("invalid PAGES_STORE_TIMEOUT_SECS '{raw}'"))?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
        };

        if debug_mode {
            tracing::warn!("debug mode enabled: raw row-store errors will be shown to visitors");
        }

        tracing::info!(
            bind_addr = %bind_addr,
            supabase_url = %supabase_url,
            tables = ?tables,
            base_url = %base_url,
            site_name = %site_name,
            ios_cta = cta.ios_app_url.is_some(),
            content_policy = ?content_policy,
            "pages configuration loaded"
        );

        Ok(Self {
            bind_addr,
            supabase_url,
            supabase_anon_key,
            tables,
            base_url,
            site_name,
            cta,
            debug_mode,
            content_policy,
            store_timeout,
        })
    }
}

/// Read an env var, treating unset and blank values as absent.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("expected a boolean"),
    }
}
