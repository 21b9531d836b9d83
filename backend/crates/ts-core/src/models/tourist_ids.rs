use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TouristIds {
    #[serde(default)]
    pub normal: Vec<String>,
    #[serde(default)]
    pub anomaly: Vec<String>,
}

impl TouristIds {
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.anomaly.is_empty()
    }
}
