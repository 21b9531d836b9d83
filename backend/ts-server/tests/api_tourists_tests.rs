//! Integration tests for the snapshot views
mod common;

use crate::common::{body_json, create_test_env, create_test_env_with_csv, get, send};

use axum::http::StatusCode;

#[tokio::test]
async fn test_get_tourist_ids_deduplicated_by_path_type() {
    let env = create_test_env().await;

    let response = send(env.router(), get("/get_tourist_ids")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["normal"], serde_json::json!(["T1", "T3"]));
    assert_eq!(json["anomaly"], serde_json::json!(["T2"]));
}

#[tokio::test]
async fn test_get_tourist_ids_empty_snapshot() {
    let env = create_test_env_with_csv("tourist_id,path_type,lat,lon\n").await;

    let response = send(env.router(), get("/get_tourist_ids")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"normal": [], "anomaly": []}));
}

#[tokio::test]
async fn test_get_live_statuses_returns_latest_status_per_tourist() {
    let env = create_test_env().await;

    let response = send(env.router(), get("/get_live_statuses")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let statuses = json.as_object().unwrap();
    assert_eq!(statuses.len(), 3);
    assert_eq!(json["T1"]["lat"], 26.92);
    assert_eq!(json["T1"]["status"], "normal");
    assert_eq!(json["T2"]["status"], "anomaly");
    assert_eq!(json["T2"]["username"], "ravi");
}

#[tokio::test]
async fn test_get_live_statuses_rows_format_returns_csv_rows() {
    let env = create_test_env().await;

    let response = send(env.router(), get("/get_live_statuses?format=rows")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["tourist_id"], "T1");
    assert_eq!(rows[0]["lat"], "26.90");
}

#[tokio::test]
async fn test_get_live_statuses_unknown_format_rejected() {
    let env = create_test_env().await;

    let response = send(env.router(), get("/get_live_statuses?format=xml")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
