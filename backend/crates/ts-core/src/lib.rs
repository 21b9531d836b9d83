pub mod error;
pub mod map;
pub mod models;
pub mod score;
mod shutdown_coordinator;
mod shutdown_guard;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use map::heatmap::{HeatPoint, HeatmapBounds};
pub use map::marker::MarkerStyle;
pub use map::ripple::{Ripple, RippleField};
pub use map::trail::TrailBook;
pub use models::alert_kind::AlertKind;
pub use models::path_point::PathPoint;
pub use models::path_selection::PathSelection;
pub use models::path_type::PathType;
pub use models::safety_alert::SafetyAlert;
pub use models::safety_status::SafetyStatus;
pub use models::session::Session;
pub use models::tourist_ids::TouristIds;
pub use models::tourist_log::TouristLogEntry;
pub use models::tourist_status::{LiveStatuses, TouristStatus};
pub use models::user::{User, UserSummary};
pub use score::{SafetyAssessment, SafetyRating, TouristSafetyScore};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
