use std::time::Duration;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the database answers, "degraded" otherwise
    pub status: String,
    /// "up" or "down"
    pub database: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health API for liveness and readiness probes
pub struct Api {
    pool: PgPool,
    probe_timeout: Duration,
}

impl Api {
    pub fn new(pool: PgPool, probe_timeout: Duration) -> Self {
        Self {
            pool,
            probe_timeout,
        }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Always answers 200 while the process is serving; `database` reports
    /// whether the catalog store is reachable.
    ///
    /// ## Response
    /// - `status`: "healthy" or "degraded"
    /// - `database`: "up" or "down"
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let database_up = persistence::db::ping(&self.pool, self.probe_timeout).await;
        Json(health_report(database_up))
    }
}

fn health_report(database_up: bool) -> HealthCheckResponse {
    let (status, database) = if database_up {
        ("healthy", "up")
    } else {
        ("degraded", "down")
    };

    HealthCheckResponse {
        status: status.to_string(),
        database: database.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}
