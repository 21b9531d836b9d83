use crate::AlertKind;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SafetyAlert {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub tourist_id: String,
    #[serde(default)]
    pub username: String,
}

impl SafetyAlert {
    pub fn is_anomaly(&self) -> bool {
        self.kind == AlertKind::Anomaly
    }

    pub fn is_sos(&self) -> bool {
        self.kind == AlertKind::Sos
    }
}
