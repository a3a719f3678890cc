use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Nothing is required; a missing webhook URL surfaces as a submission failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub pdf_webhook_url: Option<String>,
    pub submit_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            pdf_webhook_url: optional_env("PDF_WEBHOOK_URL"),
            submit_timeout: Duration::from_secs(
                optional_env("SUBMIT_TIMEOUT_SECS")
                    .unwrap_or_else(|| "120".to_string())
                    .parse::<u64>()
                    .context("SUBMIT_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            host: optional_env("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
