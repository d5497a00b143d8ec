#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use flatmates_api::config::AppConfig;
use flatmates_api::store::Store;
use flatmates_api::{app, AppState};

/// Build the full application router against the test database.
///
/// Mirrors the router construction in `main.rs` so integration tests exercise
/// the same middleware stack production uses. The store client connects
/// lazily, so tests that never touch the store run without a live MongoDB.
pub async fn build_test_app() -> Router {
    let config = AppConfig {
        database_url: std::env::var("FLATMATES_TEST_MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".into()),
        database_name: "flatmates-test".into(),
        ..AppConfig::default()
    };

    let db = flatmates_shared::clients::mongo::connect(
        &config.database_url,
        &config.database_name,
        Duration::from_secs(config.store_timeout_secs),
    )
    .await
    .expect("store handle should construct");

    let state = Arc::new(AppState {
        store: Store::new(db),
        config,
    });
    app(state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Percent-encode a `userIds` JSON array for use in a query string.
pub fn encoded_id_array(ids: &[&str]) -> String {
    let quoted: Vec<String> = ids.iter().map(|id| format!("%22{id}%22")).collect();
    format!("%5B{}%5D", quoted.join("%2C"))
}
