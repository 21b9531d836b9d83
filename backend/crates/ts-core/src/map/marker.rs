use crate::SafetyStatus;

use serde::Serialize;

pub const HIGHLIGHT_RADIUS_METERS: f64 = 1200.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MarkerStyle {
    pub color: &'static str,
    /// Dashed highlight circle, only drawn for anomaly and SOS.
    pub highlight_radius_m: Option<f64>,
}

impl MarkerStyle {
    pub fn for_status(status: SafetyStatus) -> Self {
        let color = match status {
            SafetyStatus::Sos => "red",
            SafetyStatus::Anomaly => "orange",
            SafetyStatus::Normal => "blue",
        };

        Self {
            color,
            highlight_radius_m: status.is_alerting().then_some(HIGHLIGHT_RADIUS_METERS),
        }
    }
}
