//! Health check handlers

use axum::Json;
use serde_json::{json, Value};

/// Liveness check
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness check
pub async fn readiness_check() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}
