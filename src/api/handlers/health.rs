//! Health check endpoint handler.
//!
//! Reports overall status plus a live database connectivity check, for
//! monitoring and load balancer probes.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub timestamp: String,
    pub database: HealthStatus,
}

/// GET /health - Liveness and database connectivity
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.db_pool.get().await {
        Ok(_) => HealthStatus::Healthy,
        Err(_) => HealthStatus::Unhealthy,
    };

    let (status, code) = match database {
        HealthStatus::Healthy => (HealthStatus::Healthy, StatusCode::OK),
        HealthStatus::Unhealthy => (HealthStatus::Unhealthy, StatusCode::SERVICE_UNAVAILABLE),
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
        database,
    };

    (code, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(HealthStatus::Healthy).unwrap(),
            "healthy"
        );
        assert_eq!(
            serde_json::to_value(HealthStatus::Unhealthy).unwrap(),
            "unhealthy"
        );
    }
}
