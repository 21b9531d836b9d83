pub mod alert_kind;
pub mod path_point;
pub mod path_selection;
pub mod path_type;
pub mod safety_alert;
pub mod safety_status;
pub mod session;
pub mod tourist_ids;
pub mod tourist_log;
pub mod tourist_status;
pub mod user;
