//! HTTP route handlers for the dashboard server.

pub mod actions;
pub mod chat;
pub mod profile;
pub mod progress;

use axum::Json;
use chrono::Utc;

use crate::dto::{HealthStatus, ServiceStatus};

/// Liveness root.
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "healthy",
        service: "Vytal Dashboard API",
    })
}

/// Health check endpoint.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}
