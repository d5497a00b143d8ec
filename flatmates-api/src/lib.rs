use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use config::AppConfig;
use store::Store;

pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
}

/// Build the full router. Requests are validated, dispatched to the store
/// layer, and answered; nothing is cached between requests.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::health::index))
        .route("/health", get(routes::health::health_check))
        .route("/signup", post(routes::auth::signup))
        .route("/login", post(routes::auth::login))
        .route(
            "/user",
            get(routes::users::get_user).put(routes::users::update_user),
        )
        .route("/users", get(routes::users::get_users))
        .route("/gendered-users", get(routes::users::gendered_users))
        .route("/addmatch", put(routes::users::add_match))
        .route("/messages", get(routes::messages::get_messages))
        .route("/message", post(routes::messages::add_message))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
