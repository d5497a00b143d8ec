use std::sync::Arc;
use std::time::Duration;

use flatmates_api::config::AppConfig;
use flatmates_api::store::Store;
use flatmates_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flatmates_shared::middleware::init_tracing("flatmates-api");

    let config = AppConfig::load()?;
    let port = config.port;

    let db = flatmates_shared::clients::mongo::connect(
        &config.database_url,
        &config.database_name,
        Duration::from_secs(config.store_timeout_secs),
    )
    .await?;
    let store = Store::new(db);

    let state = Arc::new(AppState { store, config });
    let router = app(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(addr = %addr, "flatmates-api starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
