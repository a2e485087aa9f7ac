use chrono::Utc;
use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "up" when the database answered a ping
    pub database: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

#[derive(ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Healthy(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    Degraded(Json<HealthCheckResponse>),
}

/// Liveness and database readiness for probes and load balancers.
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Public. Answers 503 when the database cannot be reached.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthResponse {
        let database_up = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "database ping failed"))
            .is_ok();

        let body = |status: &str, database: &str| {
            Json(HealthCheckResponse {
                status: status.to_string(),
                database: database.to_string(),
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            })
        };

        if database_up {
            HealthResponse::Healthy(body("healthy", "up"))
        } else {
            HealthResponse::Degraded(body("degraded", "down"))
        }
    }
}
