mod models;

use crate::{AlertKind, LiveStatuses, SafetyAlert, SafetyStatus, TouristStatus};

pub(crate) fn alert(tourist_id: &str, kind: &str) -> SafetyAlert {
    SafetyAlert {
        message: format!("{} alert for {}", kind, tourist_id),
        timestamp: "2025-09-10T14:00:00Z".to_string(),
        kind: AlertKind::from(kind),
        tourist_id: tourist_id.to_string(),
        username: "Unknown".to_string(),
    }
}

pub(crate) fn statuses(entries: &[(&str, SafetyStatus)]) -> LiveStatuses {
    entries
        .iter()
        .map(|(id, status)| {
            (
                id.to_string(),
                TouristStatus {
                    lat: 27.53,
                    lon: 88.51,
                    status: *status,
                    timestamp: "2025-09-10T14:00:00Z".to_string(),
                    username: "Unknown".to_string(),
                },
            )
        })
        .collect()
}
