use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub record_store: RecordBackend,
    /// Required when `record_store` is Postgres.
    pub database_url: Option<String>,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Lifetime of presigned upload URLs.
    pub upload_url_ttl: Duration,
}

/// Where analysis records live. `Memory` loses everything on restart and is
/// meant for local runs without a database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordBackend {
    Postgres,
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let record_store = match std::env::var("RECORD_STORE").as_deref() {
            Ok("memory") => RecordBackend::Memory,
            Ok("postgres") | Err(_) => RecordBackend::Postgres,
            Ok(other) => anyhow::bail!("RECORD_STORE must be 'postgres' or 'memory', got '{other}'"),
        };
        let database_url = match record_store {
            RecordBackend::Postgres => Some(require_env("DATABASE_URL")?),
            RecordBackend::Memory => std::env::var("DATABASE_URL").ok(),
        };

        Ok(Config {
            record_store,
            database_url,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_url_ttl: Duration::from_secs(
                std::env::var("UPLOAD_URL_TTL_SECS")
                    .unwrap_or_else(|_| "3600".to_string())
                    .parse::<u64>()
                    .context("UPLOAD_URL_TTL_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
