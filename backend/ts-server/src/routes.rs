use crate::{AppState, get_live_statuses, get_tourist_ids, health, login, register, static_files};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Snapshot views
        .route("/get_tourist_ids", get(get_tourist_ids))
        .route("/get_live_statuses", get(get_live_statuses))
        // Demo auth
        .route("/register", post(register))
        .route("/login", post(login))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Front-end bundle
        .fallback(static_files::serve_frontend)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
