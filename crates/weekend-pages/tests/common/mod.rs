#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use weekend_pages::store::{MemoryStore, PageRecord};
use weekend_pages::{AppState, Config, router};

/// Test configuration: two tables, no iOS link, production mode.
pub fn test_config() -> Config {
    Config {
        tables: vec!["seo_pages".to_string(), "seed_pages".to_string()],
        ..Config::default()
    }
}

/// Build the router around an in-memory store.
pub fn build_test_app(config: Config, store: MemoryStore) -> Router {
    router(AppState::with_store(config, Arc::new(store)))
}

/// The canonical example record.
pub fn brunch_taipei() -> PageRecord {
    PageRecord {
        slug: "brunch-taipei".to_string(),
        title: "Brunch Taipei".to_string(),
        city: Some("Taipei".to_string()),
        persona: Some("Couples".to_string()),
        theme: Some("Brunch".to_string()),
        meta_description: None,
        content: Some("Slow mornings, good coffee.".to_string()),
    }
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as a UTF-8 string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
