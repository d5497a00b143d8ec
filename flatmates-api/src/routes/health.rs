use axum::Json;

use flatmates_shared::types::api::HealthResponse;

pub async fn index() -> Json<&'static str> {
    Json("Welcome to the flatmates API")
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy("flatmates-api", env!("CARGO_PKG_VERSION")))
}
