use std::time::Duration;

use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

/// Open a handle to the document store.
///
/// The driver maintains an internal connection pool: every operation checks a
/// connection out and returns it when the operation resolves, on success or
/// failure alike. The timeout bounds both connection establishment and server
/// selection, so no store call can block indefinitely.
pub async fn connect(url: &str, database: &str, timeout: Duration) -> anyhow::Result<Database> {
    let mut options = ClientOptions::parse(url).await?;
    options.app_name = Some("flatmates".to_string());
    options.max_pool_size = Some(10);
    options.min_pool_size = Some(2);
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let client = Client::with_options(options)?;

    tracing::info!(database = %database, "document store connection pool created");
    Ok(client.database(database))
}
