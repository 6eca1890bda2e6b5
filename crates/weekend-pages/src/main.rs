//! Weekend Pages - HTTP server for SEO landing pages.
//!
//! Serves one HTML page per slug with canonical and Open Graph tags,
//! designed to be placed behind a CDN.

use axum::Router;
use axum::http::{Method, Request};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use weekend_pages::{AppState, Config, router};

/// Weekend Pages - server-rendered SEO landing pages.
#[derive(Parser, Debug)]
#[command(name = "weekend-pages")]
#[command(about = "Server-rendered SEO landing pages for The Weekend Club", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,

    /// Show raw row-store errors on a diagnostic page (overrides PAGES_DEBUG).
    #[arg(long)]
    debug_pages: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // A missing dotenv file is fine; deployed instances read the real environment.
    let dotenv_loaded = std::path::Path::new(&args.dotenv).exists();
    if dotenv_loaded {
        dotenvy::from_path(&args.dotenv)?;
    }

    init_tracing();
    if dotenv_loaded {
        tracing::info!(path = %args.dotenv, "loaded environment file");
    }

    // Config errors abort startup before the socket is bound.
    let mut config = Config::from_env()?;
    if args.debug_pages {
        tracing::warn!("debug mode enabled from the command line");
        config.debug_mode = true;
    }
    let bind_addr = config.bind_addr.clone();

    let app = with_middleware(router(AppState::new(config)?));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "serving landing pages");

    axum::serve(listener, app).await?;

    Ok(())
}

/// `RUST_LOG` wins; otherwise info.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Request spans carry method and path only; slugs are already in the path.
fn with_middleware(app: Router) -> Router {
    app.layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "page_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }),
    )
    .layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::HEAD]),
    )
}
