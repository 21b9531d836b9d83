use crate::{PathPoint, SafetyStatus};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TouristStatus {
    pub lat: f64,
    pub lon: f64,
    pub status: SafetyStatus,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub username: String,
}

impl TouristStatus {
    pub fn position(&self) -> PathPoint {
        PathPoint::new(self.lat, self.lon)
    }
}

/// Latest status per tourist id.
pub type LiveStatuses = BTreeMap<String, TouristStatus>;
