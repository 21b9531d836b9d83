use crate::SafetyStatus;

use serde::{Deserialize, Serialize};

/// One historical status snapshot of a tourist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TouristLogEntry {
    pub tourist_id: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub timestamp: String,
    pub status: SafetyStatus,
}
