//! REST API error types
//!
//! Every error renders as `{"error": "<message>"}`, the body shape the
//! dashboard front end already understands.

use ts_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound { message, .. } => {
                log::debug!("404: {}", message);
                (StatusCode::NOT_FOUND, message)
            }
            ApiError::Validation { message, .. } => {
                log::debug!("400: {}", message);
                (StatusCode::BAD_REQUEST, message)
            }
            ref internal @ ApiError::Internal { .. } => {
                log::error!("{}", internal);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Internal server error"),
                )
            }
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Storage failures are logged, never exposed
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        ApiError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
