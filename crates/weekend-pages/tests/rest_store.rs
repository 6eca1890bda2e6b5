//! Integration tests for the PostgREST store against a local stand-in server.

use std::collections::HashMap;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use weekend_pages::store::{PageStore, RestStore, StoreError};

const API_KEY: &str = "test-anon-key";

/// Minimal PostgREST stand-in serving `/rest/v1/{table}`.
///
/// - `seo_pages?slug=eq.brunch-taipei` → one row
/// - `seo_pages?slug=eq.dup` → two rows
/// - `seo_pages?slug=eq.garbage` → a non-list body
/// - `missing_table` → PostgREST's 404 relation error
/// - `slow_table` → answers after two seconds
/// - wrong or missing apikey → 401
async fn postgrest(
    Path(table): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let authorized = headers.get("apikey").is_some_and(|v| v == API_KEY)
        && headers
            .get("authorization")
            .is_some_and(|v| v == format!("Bearer {API_KEY}").as_str());
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"message": "Invalid API key"})),
        )
            .into_response();
    }

    if table == "slow_table" {
        tokio::time::sleep(Duration::from_secs(2)).await;
        return Json(serde_json::json!([])).into_response();
    }

    if table == "missing_table" {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "code": "42P01",
                "details": null,
                "hint": null,
                "message": "relation \"public.missing_table\" does not exist"
            })),
        )
            .into_response();
    }

    assert_eq!(params.get("select").map(String::as_str), Some("*"));
    assert_eq!(params.get("limit").map(String::as_str), Some("2"));

    let row = |slug: &str| {
        serde_json::json!({
            "slug": slug,
            "title": "Brunch Taipei",
            "city": "Taipei",
            "persona": null,
            "theme": null,
            "meta_description": null,
            "content": null
        })
    };

    match params.get("slug").map(String::as_str) {
        Some("eq.brunch-taipei") => Json(serde_json::json!([row("brunch-taipei")])).into_response(),
        Some("eq.dup") => Json(serde_json::json!([row("dup"), row("dup")])).into_response(),
        Some("eq.garbage") => Json(serde_json::json!({"not": "a list"})).into_response(),
        _ => Json(serde_json::json!([])).into_response(),
    }
}

/// Start the stand-in server and return its base URL.
async fn spawn_postgrest() -> String {
    let app = Router::new().route("/rest/v1/{table}", get(postgrest));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn store(url: &str, key: &str) -> RestStore {
    RestStore::new(url, key, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn fetches_single_row() {
    let url = spawn_postgrest().await;
    let row = store(&url, API_KEY)
        .fetch_page("seo_pages", "brunch-taipei")
        .await
        .unwrap()
        .expect("row");
    assert_eq!(row.slug, "brunch-taipei");
    assert_eq!(row.city(), Some("Taipei"));
}

#[tokio::test]
async fn zero_rows_is_none() {
    let url = spawn_postgrest().await;
    let row = store(&url, API_KEY)
        .fetch_page("seo_pages", "nowhere")
        .await
        .unwrap();
    assert!(row.is_none());
}

#[tokio::test]
async fn duplicate_rows_are_ambiguous() {
    let url = spawn_postgrest().await;
    let err = store(&url, API_KEY)
        .fetch_page("seo_pages", "dup")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Ambiguous { .. }));
}

#[tokio::test]
async fn missing_table_surfaces_postgrest_error() {
    let url = spawn_postgrest().await;
    let err = store(&url, API_KEY)
        .fetch_page("missing_table", "brunch-taipei")
        .await
        .unwrap_err();
    match err {
        StoreError::Api { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body["code"], "42P01");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn bad_key_is_unauthorized() {
    let url = spawn_postgrest().await;
    let err = store(&url, "wrong")
        .fetch_page("seo_pages", "brunch-taipei")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Api { status: 401, .. }));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let url = spawn_postgrest().await;
    let err = store(&url, API_KEY)
        .fetch_page("seo_pages", "garbage")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)));
}

#[tokio::test]
async fn unreachable_store_is_request_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = store(&format!("http://{addr}"), API_KEY)
        .fetch_page("seo_pages", "brunch-taipei")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Request(_)));
    assert_eq!(err.detail()["kind"], "request");
}

#[tokio::test]
async fn slow_store_times_out() {
    let url = spawn_postgrest().await;
    let store = RestStore::new(&url, API_KEY, Duration::from_millis(50)).unwrap();
    let err = store
        .fetch_page("slow_table", "brunch-taipei")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Request(_)));
    assert_eq!(err.detail()["timeout"], true);
}
