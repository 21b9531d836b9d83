//! Request and response bodies of the prediction service.

use ts_core::{PathPoint, PathType, Session};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub(crate) struct PathRequest<'a> {
    pub tourist_id: &'a str,
    #[serde(rename = "type")]
    pub path_type: PathType,
    pub username: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathResponse {
    #[serde(default)]
    pub tourist_id: String,
    pub path_type: PathType,
    #[serde(default)]
    pub path: Vec<PathPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationUpdate {
    pub tourist_id: String,
    pub lat: f64,
    pub lon: f64,
    pub path_type: PathType,
}

/// Path walked so far, sent for anomaly scoring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest {
    pub tourist_id: String,
    pub path_type: PathType,
    pub path: Vec<PathPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SosRequest<'a> {
    pub tourist_id: &'a str,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TouristRef<'a> {
    pub tourist_id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Sign-up form of the auth service
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
    pub aadhaar_number: String,
    pub phone: String,
    pub path_type: PathType,
}

/// Answer of `/auth/login` and `/auth/register`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<Session>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
