//! Register/login against the flat user file. No passwords, no tokens.

use crate::{
    ApiError, ApiResult, AppState, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

use ts_core::PathType;
use ts_store::NewUser;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use log::{info, warn};

const MISSING_FIELDS: &str = "Username and Phone are required";
const USER_NOT_FOUND: &str = "User not found";

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<RegisterResponse>> {
    let req = body_or_default(payload)?;
    let username = non_empty(req.username).ok_or_else(|| ApiError::validation(MISSING_FIELDS))?;
    let phone = non_empty(req.phone).ok_or_else(|| ApiError::validation(MISSING_FIELDS))?;

    let path_type = match non_empty(req.path_type) {
        Some(raw) => Some(
            raw.parse::<PathType>()
                .map_err(|_| ApiError::validation(format!("Invalid pathType '{}'", raw)))?,
        ),
        None => None,
    };

    let user = state
        .users
        .register(NewUser {
            username,
            email: req.email,
            phone,
            date_of_birth: req.date_of_birth,
            aadhaar_number: req.aadhaar_number,
            path_type,
        })
        .await?;

    info!("Registered user {} ({})", user.username, user.id);

    Ok(Json(RegisterResponse {
        success: true,
        message: String::from("Registered successfully"),
    }))
}

/// POST /login
///
/// First user in file order whose username or phone matches.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let req = body_or_default(payload)?;
    let user = state
        .users
        .find_first(req.username.as_deref(), req.phone.as_deref())
        .await
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    info!("User {} logged in", user.username);

    Ok(Json(LoginResponse {
        success: true,
        user: user.summary(),
    }))
}

/// A request without a JSON content type reads as an empty body; a body
/// that fails to parse is a 400.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            Err(ApiError::validation(rejection.body_text()))
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
