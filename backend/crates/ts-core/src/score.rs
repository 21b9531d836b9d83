//! Safety score arithmetic.
//!
//! Scores are recomputed from two independently polled feeds: safety alerts
//! and live statuses. An SOS alert only costs points while the tourist it
//! names is still reported as `sos`, so resolved emergencies drop out even if
//! the alert itself has not been cleared yet.

use crate::{LiveStatuses, SafetyAlert, SafetyStatus};

use serde::Serialize;

pub const BASE_SCORE: i64 = 85;
pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

pub const LATE_NIGHT_PENALTY: i64 = 10;
pub const ANOMALY_PENALTY: i64 = 5;
pub const SOS_PENALTY: i64 = 15;

pub const TOURIST_ANOMALY_PENALTY: i64 = 15;
pub const TOURIST_SOS_PENALTY: i64 = 25;

/// Late night is any local hour outside 07:00-21:59.
pub fn is_late_night(hour: u32) -> bool {
    !(7..=21).contains(&hour)
}

/// Overall score: 85, minus 10 at night, 5 per anomaly, 15 per active SOS.
pub fn safety_score(hour: u32, anomaly_count: usize, active_sos_count: usize) -> u8 {
    let mut score = BASE_SCORE;

    if is_late_night(hour) {
        score -= LATE_NIGHT_PENALTY;
    }

    score = score.saturating_sub(penalty(anomaly_count, ANOMALY_PENALTY));
    score = score.saturating_sub(penalty(active_sos_count, SOS_PENALTY));

    clamp_score(score)
}

fn penalty(count: usize, per_item: i64) -> i64 {
    i64::try_from(count)
        .unwrap_or(i64::MAX)
        .saturating_mul(per_item)
}

fn clamp_score(score: i64) -> u8 {
    // Clamped to 0..=100, always fits
    score.clamp(MIN_SCORE, MAX_SCORE) as u8
}

fn sos_still_active(alert: &SafetyAlert, statuses: &LiveStatuses) -> bool {
    alert.is_sos()
        && statuses
            .get(&alert.tourist_id)
            .is_some_and(|s| s.status == SafetyStatus::Sos)
}

/// Number of SOS alerts whose tourist is still in `sos` state.
pub fn active_sos_count(alerts: &[SafetyAlert], statuses: &LiveStatuses) -> usize {
    alerts
        .iter()
        .filter(|alert| sos_still_active(alert, statuses))
        .count()
}

pub fn anomaly_count(alerts: &[SafetyAlert]) -> usize {
    alerts.iter().filter(|alert| alert.is_anomaly()).count()
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SafetyRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SafetyRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Overall score plus the counts that produced it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SafetyAssessment {
    pub score: u8,
    pub rating: SafetyRating,
    pub late_night: bool,
    pub anomaly_count: usize,
    pub active_sos_count: usize,
}

impl SafetyAssessment {
    pub fn evaluate(alerts: &[SafetyAlert], statuses: &LiveStatuses, hour: u32) -> Self {
        let anomalies = anomaly_count(alerts);
        let active_sos = active_sos_count(alerts, statuses);
        let score = safety_score(hour, anomalies, active_sos);

        Self {
            score,
            rating: SafetyRating::from_score(score),
            late_night: is_late_night(hour),
            anomaly_count: anomalies,
            active_sos_count: active_sos,
        }
    }
}

/// Score of a single monitored tourist.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TouristSafetyScore {
    pub id: String,
    pub score: u8,
    pub late_night: bool,
    pub has_anomaly: bool,
    pub sos_active: bool,
}

impl TouristSafetyScore {
    pub fn evaluate(id: &str, alerts: &[SafetyAlert], statuses: &LiveStatuses, hour: u32) -> Self {
        let late_night = is_late_night(hour);
        let has_anomaly = alerts
            .iter()
            .any(|alert| alert.tourist_id == id && alert.is_anomaly());
        let sos_active = alerts
            .iter()
            .any(|alert| alert.tourist_id == id && sos_still_active(alert, statuses));

        let mut score = BASE_SCORE;
        if late_night {
            score -= LATE_NIGHT_PENALTY;
        }
        if has_anomaly {
            score -= TOURIST_ANOMALY_PENALTY;
        }
        if sos_active {
            score -= TOURIST_SOS_PENALTY;
        }

        Self {
            id: id.to_string(),
            score: clamp_score(score),
            late_night,
            has_anomaly,
            sos_active,
        }
    }
}
