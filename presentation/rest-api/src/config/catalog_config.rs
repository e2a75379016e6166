use std::env;
use std::time::Duration;

use anyhow::Context;

/// Settings shared by the catalog use cases and store adapters.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base embedded in image URLs, without trailing slash.
    pub public_base_url: String,
    pub store_timeout: Duration,
    pub identity_timeout: Duration,
}

impl CatalogConfig {
    /// Environment variables:
    /// - PUBLIC_BASE_URL (default: "http://127.0.0.1:8000")
    /// - STORE_TIMEOUT_SECS (default: 10)
    /// - IDENTITY_TIMEOUT_SECS (default: 10)
    pub fn from_env() -> anyhow::Result<Self> {
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        Ok(Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            store_timeout: secs_from_env("STORE_TIMEOUT_SECS", 10)?,
            identity_timeout: secs_from_env("IDENTITY_TIMEOUT_SECS", 10)?,
        })
    }
}

fn secs_from_env(name: &str, default: u64) -> anyhow::Result<Duration> {
    match env::var(name) {
        Ok(raw) => parse_secs(&raw).with_context(|| format!("{name} must be a positive integer")),
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

fn parse_secs(raw: &str) -> anyhow::Result<Duration> {
    let secs: u64 = raw.trim().parse()?;
    anyhow::ensure!(secs > 0, "timeout must be greater than zero");
    Ok(Duration::from_secs(secs))
}
