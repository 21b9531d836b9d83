#![allow(dead_code)]

//! Test infrastructure for ts-server API tests

use ts_core::ShutdownCoordinator;
use ts_server::AppState;
use ts_store::{SimulationSnapshot, UserRepository};

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub const FIXTURE_CSV: &str = "\
tourist_id,path_type,lat,lon,timestamp,username
T1,normal,26.90,75.80,2024-01-01T10:00:00,asha
T2,anomaly,26.91,75.81,2024-01-01T10:00:00,ravi
T1,normal,26.92,75.82,2024-01-01T10:00:05,asha
T3,normal,26.93,75.83,2024-01-01T10:00:05,mira
T2,anomaly,26.94,75.84,2024-01-01T10:00:10,ravi
";

/// Temp directory holding the user file and front-end bundle of one test
pub struct TestEnv {
    pub temp: TempDir,
    pub state: AppState,
}

impl TestEnv {
    pub fn users_file(&self) -> PathBuf {
        self.temp.path().join("authUsers.json")
    }

    pub fn frontend_dir(&self) -> PathBuf {
        self.temp.path().join("out")
    }

    pub fn router(&self) -> Router {
        ts_server::build_router(self.state.clone())
    }
}

/// Create AppState for testing over the fixture CSV
pub async fn create_test_env() -> TestEnv {
    create_test_env_with_csv(FIXTURE_CSV).await
}

pub async fn create_test_env_with_csv(csv: &str) -> TestEnv {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let frontend_dir = temp.path().join("out");
    std::fs::create_dir_all(&frontend_dir).expect("Failed to create frontend dir");

    let snapshot =
        SimulationSnapshot::from_reader(csv.as_bytes()).expect("Failed to parse fixture CSV");
    let users = UserRepository::open(temp.path().join("authUsers.json"))
        .await
        .expect("Failed to open user file");

    let state = AppState {
        snapshot: Arc::new(snapshot),
        users: Arc::new(users),
        frontend_dir: Arc::new(frontend_dir),
        shutdown: ShutdownCoordinator::new(),
    };

    TestEnv { temp, state }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST with no content-type header, as some clients send.
pub fn post_untyped(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
