//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::AppState;

/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "reimbursement-api",
    }))
}

/// GET /health/ready
///
/// Probes the claim store to confirm the service can serve traffic.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match state.claims.list_all().await {
        Ok(_) => Ok(Json(json!({
            "status": "ready",
            "store": "up",
        }))),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}
