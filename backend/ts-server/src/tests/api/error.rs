use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_error_body() {
    let response = ApiError::not_found("User not found").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json, serde_json::json!({"error": "User not found"}));
}

#[tokio::test]
async fn test_validation_error_returns_400_with_message() {
    let response = ApiError::validation("Username and Phone are required").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Username and Phone are required");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::Internal {
        message: "disk full at /var/data/authUsers.json".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Internal server error");
}
