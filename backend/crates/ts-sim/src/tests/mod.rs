mod session_store;

use crate::{
    ClientError, ClientResult, LocationUpdate, PathResponse, PredictRequest, SharedSimulation,
    Simulation, TouristApi,
};

use ts_core::{
    AlertKind, LiveStatuses, PathPoint, PathSelection, PathType, SafetyAlert, SafetyStatus,
    TouristIds, TouristLogEntry, TouristStatus,
};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

pub(crate) const PERIOD: Duration = Duration::from_millis(1500);

/// In-memory service that records every call as `"<op> <args>"`.
///
/// `None` feeds and unknown tourists answer like a failing service.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub calls: Mutex<Vec<String>>,
    pub paths: Mutex<HashMap<String, Vec<PathPoint>>>,
    pub alerts: Mutex<Option<Vec<SafetyAlert>>>,
    pub statuses: Mutex<Option<LiveStatuses>>,
    pub logs: Mutex<HashMap<String, Vec<TouristLogEntry>>>,
    pub fail_reset: bool,
    pub fail_updates: bool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            alerts: Mutex::new(Some(Vec::new())),
            statuses: Mutex::new(Some(LiveStatuses::new())),
            ..Self::default()
        }
    }

    pub fn with_path(self, tourist_id: &str, path: Vec<PathPoint>) -> Self {
        self.paths
            .lock()
            .unwrap()
            .insert(tourist_id.to_string(), path);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with(prefix))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TouristApi for FakeApi {
    async fn tourist_ids(&self) -> ClientResult<TouristIds> {
        self.record(String::from("tourist_ids"));
        Ok(TouristIds::default())
    }

    async fn safety_alerts(&self) -> ClientResult<Vec<SafetyAlert>> {
        self.record(String::from("safety_alerts"));
        self.alerts
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ClientError::api_error(500, "alerts down"))
    }

    async fn clear_safety_alerts(&self) -> ClientResult<()> {
        self.record(String::from("clear_safety_alerts"));
        if let Some(alerts) = self.alerts.lock().unwrap().as_mut() {
            alerts.clear();
        }
        Ok(())
    }

    async fn live_statuses(&self) -> ClientResult<LiveStatuses> {
        self.record(String::from("live_statuses"));
        self.statuses
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ClientError::api_error(500, "statuses down"))
    }

    async fn reset_simulation(&self) -> ClientResult<()> {
        self.record(String::from("reset_simulation"));
        if self.fail_reset {
            return Err(ClientError::api_error(500, "reset failed"));
        }
        Ok(())
    }

    async fn get_path(
        &self,
        selection: &PathSelection,
        username: &str,
    ) -> ClientResult<PathResponse> {
        self.record(format!(
            "get_path {} {} {}",
            selection.tourist_id, selection.path_type, username
        ));
        let path = self
            .paths
            .lock()
            .unwrap()
            .get(&selection.tourist_id)
            .cloned()
            .unwrap_or_default();
        Ok(PathResponse {
            tourist_id: selection.tourist_id.clone(),
            path_type: selection.path_type,
            path,
        })
    }

    async fn update_location(&self, update: &LocationUpdate) -> ClientResult<()> {
        self.record(format!(
            "update_location {} {} {}",
            update.tourist_id, update.lat, update.lon
        ));
        if self.fail_updates {
            return Err(ClientError::api_error(503, "service unavailable"));
        }
        Ok(())
    }

    async fn predict(&self, request: &PredictRequest) -> ClientResult<Value> {
        self.record(format!(
            "predict {} {}",
            request.tourist_id,
            request.path.len()
        ));
        Ok(json!({ "prediction": "normal" }))
    }

    async fn send_sos(&self, tourist_id: &str, position: PathPoint) -> ClientResult<()> {
        self.record(format!(
            "send_sos {} {} {}",
            tourist_id, position.lat, position.lon
        ));
        Ok(())
    }

    async fn resolve_sos(&self, tourist_id: &str) -> ClientResult<()> {
        self.record(format!("resolve_sos {}", tourist_id));
        Ok(())
    }

    async fn tourist_logs(&self, tourist_id: &str) -> ClientResult<Vec<TouristLogEntry>> {
        self.record(format!("tourist_logs {}", tourist_id));
        self.logs
            .lock()
            .unwrap()
            .get(tourist_id)
            .cloned()
            .ok_or_else(|| ClientError::api_error(404, "HTTP error! status: 404"))
    }
}

pub(crate) fn path_of(len: usize) -> Vec<PathPoint> {
    (0..len)
        .map(|i| PathPoint::new(26.90 + i as f64 * 0.01, 75.80 + i as f64 * 0.01))
        .collect()
}

pub(crate) fn shared(tourist_id: &str, path: Vec<PathPoint>) -> SharedSimulation {
    Arc::new(tokio::sync::Mutex::new(Simulation::new(
        tourist_id,
        path,
        PathType::Normal,
    )))
}

pub(crate) fn status(lat: f64, lon: f64, status: SafetyStatus) -> TouristStatus {
    TouristStatus {
        lat,
        lon,
        status,
        timestamp: String::from("2024-01-01T10:00:00"),
        username: String::from("asha"),
    }
}

pub(crate) fn alert(tourist_id: &str, kind: AlertKind) -> SafetyAlert {
    SafetyAlert {
        message: String::from("test alert"),
        timestamp: String::from("2024-01-01T10:00:00"),
        kind,
        tourist_id: tourist_id.to_string(),
        username: String::from("asha"),
    }
}

pub(crate) fn log_entry(tourist_id: &str, lat: f64, lon: f64, status: SafetyStatus) -> TouristLogEntry {
    TouristLogEntry {
        tourist_id: tourist_id.to_string(),
        lat,
        lon,
        timestamp: String::from("2024-01-01T10:00:00"),
        status,
    }
}
