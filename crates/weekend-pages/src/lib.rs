//! Weekend Pages - server-rendered SEO landing pages for The Weekend Club.
//!
//! This crate provides a small HTTP server that looks a landing page up by
//! URL slug in a Supabase (PostgREST) table and renders it as a static HTML
//! document with canonical and Open Graph tags and a call-to-action block.
//!
//! # Architecture
//!
//! - **Store**: Single-row lookup by slug against a read-only row store
//! - **Resolve**: Walks the configured tables in order; first hit wins, first error stops
//! - **Render**: Generates HTML with maud (compile-time templates)
//!
//! # URL Pattern
//!
//! ```text
//! GET /{slug}        landing page
//! GET /{slug}.json   record + derived metadata
//! ```
//!
//! # Outcomes
//!
//! - Found - 200 with the rendered page
//! - Not found - 404 page
//! - Fetch error - 502 page, or a 200 diagnostic page with the raw error in debug mode
//!
//! # Security
//!
//! - Record content is HTML-escaped unless a different content policy is configured
//! - CTA targets are validated (HTTPS/HTTP only) before use in attributes
//! - Strict Content-Security-Policy: no scripts at all
//! - X-Frame-Options: DENY prevents clickjacking

pub mod config;
pub mod error;
pub mod render;
pub mod resolve;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
