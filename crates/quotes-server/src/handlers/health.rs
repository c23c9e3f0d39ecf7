//! Health check and root handlers

use axum::Json;
use quotes_types::HealthStatus;

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

pub async fn ready() -> Json<HealthStatus> {
    Json(HealthStatus::ready())
}

pub async fn root() -> &'static str {
    "Hello World!"
}
