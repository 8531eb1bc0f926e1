//! Health check controller.

use crate::state::AppState;
use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde::Serialize;
use tracing::warn;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// `ready` or `not_ready`.
    pub status: String,
    /// `up`, `down`, or `none` when no database is attached.
    pub database: String,
}

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint. Answers 503 while the database is unreachable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match &state.database {
        Some(db) => match db.health_check().await {
            Ok(()) => "up",
            Err(e) => {
                warn!("Readiness check failed: {}", e);
                "down"
            }
        },
        None => "none",
    };

    let (status, label) = if database == "down" {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    } else {
        (StatusCode::OK, "ready")
    };

    (
        status,
        Json(ReadinessResponse {
            status: label.to_string(),
            database: database.to_string(),
        }),
    )
}

/// Liveness check endpoint.
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
