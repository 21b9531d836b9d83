//! Alert and live-status polling feeding the safety score.

use crate::{SimResult, TouristApi};

use ts_core::{LiveStatuses, SafetyAlert, SafetyAssessment, TouristSafetyScore};

use std::sync::Arc;

use log::error;

pub struct Monitor {
    api: Arc<dyn TouristApi>,
    alerts: Vec<SafetyAlert>,
    statuses: LiveStatuses,
}

impl Monitor {
    pub fn new(api: Arc<dyn TouristApi>) -> Self {
        Self {
            api,
            alerts: Vec::new(),
            statuses: LiveStatuses::new(),
        }
    }

    pub fn alerts(&self) -> &[SafetyAlert] {
        &self.alerts
    }

    pub fn statuses(&self) -> &LiveStatuses {
        &self.statuses
    }

    /// Refresh alerts and statuses independently. A failed fetch keeps the
    /// previous value of that collection.
    pub async fn poll(&mut self) {
        let (alerts, statuses) = tokio::join!(self.api.safety_alerts(), self.api.live_statuses());

        match alerts {
            Ok(alerts) => self.alerts = alerts,
            Err(e) => error!("Error fetching safety alerts: {}", e),
        }
        match statuses {
            Ok(statuses) => self.statuses = statuses,
            Err(e) => error!("Error fetching live statuses: {}", e),
        }
    }

    /// Drop every alert on the service, then locally.
    pub async fn clear_alerts(&mut self) -> SimResult<()> {
        self.api.clear_safety_alerts().await?;
        self.alerts.clear();
        Ok(())
    }

    pub fn assessment(&self, hour: u32) -> SafetyAssessment {
        SafetyAssessment::evaluate(&self.alerts, &self.statuses, hour)
    }

    pub fn tourist_scores<S: AsRef<str>>(&self, ids: &[S], hour: u32) -> Vec<TouristSafetyScore> {
        ids.iter()
            .map(|id| TouristSafetyScore::evaluate(id.as_ref(), &self.alerts, &self.statuses, hour))
            .collect()
    }
}
