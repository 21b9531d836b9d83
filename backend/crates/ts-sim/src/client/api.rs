use crate::{ClientResult, LocationUpdate, PathResponse, PredictRequest};

use ts_core::{LiveStatuses, PathPoint, PathSelection, SafetyAlert, TouristIds, TouristLogEntry};

use async_trait::async_trait;
use serde_json::Value;

/// Calls the simulator and dashboard make against the prediction service.
#[async_trait]
pub trait TouristApi: Send + Sync {
    async fn tourist_ids(&self) -> ClientResult<TouristIds>;

    async fn safety_alerts(&self) -> ClientResult<Vec<SafetyAlert>>;

    async fn clear_safety_alerts(&self) -> ClientResult<()>;

    async fn live_statuses(&self) -> ClientResult<LiveStatuses>;

    async fn reset_simulation(&self) -> ClientResult<()>;

    async fn get_path(&self, selection: &PathSelection, username: &str)
    -> ClientResult<PathResponse>;

    async fn update_location(&self, update: &LocationUpdate) -> ClientResult<()>;

    async fn predict(&self, request: &PredictRequest) -> ClientResult<Value>;

    async fn send_sos(&self, tourist_id: &str, position: PathPoint) -> ClientResult<()>;

    async fn resolve_sos(&self, tourist_id: &str) -> ClientResult<()>;

    async fn tourist_logs(&self, tourist_id: &str) -> ClientResult<Vec<TouristLogEntry>>;
}
