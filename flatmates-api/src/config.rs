use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_db")]
    pub database_url: String,
    #[serde(default = "default_db_name")]
    pub database_name: String,
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: i64,
    #[serde(default = "default_store_timeout")]
    pub store_timeout_secs: u64,
}

fn default_port() -> u16 { 8000 }
fn default_db() -> String { "mongodb://localhost:27017".into() }
fn default_db_name() -> String { "app-data".into() }
fn default_jwt_secret() -> String { "development-secret-change-in-production".into() }
fn default_token_ttl() -> i64 { 86400 }
fn default_store_timeout() -> u64 { 10 }

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("FLATMATES").separator("__"))
            .build()?;
        Ok(config.try_deserialize().unwrap_or_else(|_| Self::default()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            database_url: default_db(),
            database_name: default_db_name(),
            jwt_secret: default_jwt_secret(),
            token_ttl_secs: default_token_ttl(),
            store_timeout_secs: default_store_timeout(),
        }
    }
}
