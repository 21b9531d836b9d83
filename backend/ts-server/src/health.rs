use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "simulation_rows": state.snapshot.len(),
        "users": state.users.count().await,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe
pub async fn readiness(State(state): State<AppState>) -> Response {
    if state.shutdown.is_shutdown() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}
