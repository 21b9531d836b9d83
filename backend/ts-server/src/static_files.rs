//! Front-end bundle with single-page-app fallback.

use crate::AppState;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

const INDEX_FILE: &str = "index.html";
pub const FRONTEND_MISSING: &str = "Frontend build not found. Ensure your 'out' directory exists.";

/// Fallback for every unrouted path: a file from the bundle, else its
/// `index.html`, else a plain 404.
pub async fn serve_frontend(State(state): State<AppState>, request: Request) -> Response {
    if request.method() != Method::GET && request.method() != Method::HEAD {
        return StatusCode::NOT_FOUND.into_response();
    }

    let headers = request.headers().clone();
    let dir = state.frontend_dir.as_path();

    let Ok(response) = ServeDir::new(dir).oneshot(request).await;
    if response.status() != StatusCode::NOT_FOUND {
        return response.map(Body::new);
    }

    let index = dir.join(INDEX_FILE);
    if !index.is_file() {
        return (StatusCode::NOT_FOUND, FRONTEND_MISSING).into_response();
    }

    let mut index_request = Request::new(Body::empty());
    *index_request.headers_mut() = headers;
    let Ok(response) = ServeFile::new(index).oneshot(index_request).await;
    response.map(Body::new)
}
