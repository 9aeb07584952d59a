//! Health check endpoint handlers.
//!
//! This module provides health check functionality for monitoring and load
//! balancer health checks. The relay holds no stateful dependencies, so the
//! checks report on the one thing that can be misconfigured: the push
//! provider credentials.

use crate::api::doc::HEALTH_TAG;
use crate::state::AppState;
use axum::{Router, extract::State, http::StatusCode, response::Json, routing::get};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Health check response structure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Application version
    pub version: String,
    /// Timestamp of the health check (RFC 3339)
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: String,
    /// Detailed checks for various components
    pub checks: HashMap<String, ComponentHealth>,
}

/// Health status enumeration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All systems operational
    Healthy,
    /// Some non-critical issues
    Degraded,
    /// Critical issues present
    Unhealthy,
}

/// Individual component health information.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealth {
    /// Component status
    pub status: HealthStatus,
    /// Optional message with details
    pub message: Option<String>,
}

/// Creates health check routes.
///
/// # Routes
/// - `GET /health` - Basic health check
/// - `GET /health/ready` - Readiness probe
/// - `GET /health/live` - Liveness probe
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .route("/health/live", get(liveness_check))
}

/// Basic health check endpoint.
///
/// The service is degraded (but still serving) when provider credentials
/// are absent: relays will fail closed until they are configured.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy or degraded", body = HealthResponse)
    ),
    tag = HEALTH_TAG
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();

    let provider_check = check_provider_config(&state);
    let overall_status = match provider_check.status {
        HealthStatus::Healthy => HealthStatus::Healthy,
        _ => HealthStatus::Degraded,
    };
    checks.insert("provider_config".to_string(), provider_check);

    Json(HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: jiff::Timestamp::now().to_string(),
        checks,
    })
}

/// Readiness probe endpoint.
///
/// The relay is ready as soon as it is serving; a missing credential set is
/// surfaced through `/health` rather than taking the service out of
/// rotation, since it affects relays but not the process.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Service is ready")
    ),
    tag = HEALTH_TAG
)]
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}

/// Liveness probe endpoint.
///
/// # Responses
/// - `200 OK` - Service is alive
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is alive")
    ),
    tag = HEALTH_TAG
)]
pub async fn liveness_check() -> StatusCode {
    // Simple liveness check - if we can respond, we're alive
    StatusCode::OK
}

/// Check whether the push provider credentials are configured.
fn check_provider_config(state: &AppState) -> ComponentHealth {
    if state.settings.onesignal.has_credentials() {
        ComponentHealth {
            status: HealthStatus::Healthy,
            message: Some("Credentials configured".to_string()),
        }
    } else {
        ComponentHealth {
            status: HealthStatus::Degraded,
            message: Some("Provider credentials are not configured".to_string()),
        }
    }
}
