//! Live dashboard: status polling, trails, logs, heatmap and ripples.

use crate::{ClientError, SimResult, TouristApi};

use ts_core::map::heatmap::{heat_points, regional_heatmap};
use ts_core::{
    HeatPoint, LiveStatuses, MarkerStyle, RippleField, SafetyStatus, TouristLogEntry, TrailBook,
};

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use log::{debug, error, warn};
use rand::Rng;

/// Shown when the service has no logs endpoint
pub const LOGS_UNAVAILABLE: &str = "Logs endpoint not available. Please check if the backend server is running with the latest version.";

pub struct Dashboard {
    api: Arc<dyn TouristApi>,
    statuses: LiveStatuses,
    trails: TrailBook,
    logs: BTreeMap<String, Vec<TouristLogEntry>>,
    ripples: BTreeMap<String, RippleField>,
    error: Option<String>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn TouristApi>, trail_length: usize) -> Self {
        Self {
            api,
            statuses: LiveStatuses::new(),
            trails: TrailBook::new(trail_length),
            logs: BTreeMap::new(),
            ripples: BTreeMap::new(),
            error: None,
        }
    }

    pub fn statuses(&self) -> &LiveStatuses {
        &self.statuses
    }

    pub fn trails(&self) -> &TrailBook {
        &self.trails
    }

    pub fn logs(&self, tourist_id: &str) -> Option<&[TouristLogEntry]> {
        self.logs.get(tourist_id).map(Vec::as_slice)
    }

    pub fn ripples(&self) -> &BTreeMap<String, RippleField> {
        &self.ripples
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Marker styling for every known tourist
    pub fn markers(&self) -> Vec<(&str, MarkerStyle)> {
        self.statuses
            .iter()
            .map(|(id, status)| (id.as_str(), MarkerStyle::for_status(status.status)))
            .collect()
    }

    /// Fetch live statuses and extend trails. On failure the previous
    /// statuses stay and the error is kept for display.
    pub async fn poll_statuses(&mut self) {
        match self.api.live_statuses().await {
            Ok(statuses) => {
                self.trails.record(&statuses);
                self.statuses = statuses;
                self.error = None;
            }
            Err(e) => {
                error!("Error fetching statuses: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Background refresh of a tourist's logs. A 404 means no logs yet.
    pub async fn refresh_logs(&mut self, tourist_id: &str) {
        match self.api.tourist_logs(tourist_id).await {
            Ok(entries) => {
                self.logs.insert(tourist_id.to_string(), entries);
            }
            Err(e) if e.is_not_found() => debug!("No logs yet for tourist {}", tourist_id),
            Err(e) => error!("Error updating logs for {}: {}", tourist_id, e),
        }
    }

    /// Explicitly requested logs. Here a 404 is reported to the user.
    pub async fn open_logs(&mut self, tourist_id: &str) -> SimResult<&[TouristLogEntry]> {
        match self.api.tourist_logs(tourist_id).await {
            Ok(entries) => {
                self.error = None;
                let cached = self.logs.entry(tourist_id.to_string()).or_default();
                *cached = entries;
                Ok(cached.as_slice())
            }
            Err(e) if e.is_not_found() => {
                self.error = Some(String::from(LOGS_UNAVAILABLE));
                Err(ClientError::api_error(404, LOGS_UNAVAILABLE).into())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Fetch logs of every known tourist concurrently. Individual failures
    /// are skipped; previously cached logs of those tourists stay.
    pub async fn refresh_heatmap(&mut self) {
        let ids: Vec<String> = self.statuses.keys().cloned().collect();
        let api = &self.api;

        let results = join_all(ids.into_iter().map(|id| async move {
            let logs = api.tourist_logs(&id).await;
            (id, logs)
        }))
        .await;

        for (id, result) in results {
            match result {
                Ok(entries) => {
                    self.logs.insert(id, entries);
                }
                Err(e) if e.is_not_found() => {}
                Err(e) => warn!("Error fetching logs for {}: {}", id, e),
            }
        }
        self.error = None;
    }

    pub fn heat_points(&self) -> Vec<HeatPoint> {
        heat_points(self.logs.values().flatten())
    }

    pub fn regional_heat_points<R: Rng>(&self, rng: &mut R) -> Vec<HeatPoint> {
        regional_heatmap(&self.heat_points(), rng)
    }

    /// One animation step: alerting tourists grow ripples, others lose them.
    pub fn tick_ripples(&mut self) {
        let statuses = &self.statuses;
        self.ripples.retain(|id, _| {
            statuses
                .get(id)
                .is_some_and(|status| status.status.is_alerting())
        });

        for (id, status) in statuses {
            if status.status.is_alerting() {
                self.ripples.entry(id.clone()).or_default().tick();
            }
        }
    }

    /// Resolve an SOS remotely, then mark the tourist normal and note the
    /// resolution in its cached log.
    pub async fn resolve_sos(&mut self, tourist_id: &str) -> SimResult<()> {
        if let Err(e) = self.api.resolve_sos(tourist_id).await {
            self.error = Some(e.to_string());
            return Err(e.into());
        }

        if let Some(status) = self.statuses.get_mut(tourist_id) {
            status.status = SafetyStatus::Normal;

            if let Some(entries) = self.logs.get_mut(tourist_id) {
                entries.push(TouristLogEntry {
                    tourist_id: tourist_id.to_string(),
                    lat: status.lat,
                    lon: status.lon,
                    timestamp: Utc::now().to_rfc3339(),
                    status: SafetyStatus::Normal,
                });
            }
        }

        self.error = None;
        Ok(())
    }
}
