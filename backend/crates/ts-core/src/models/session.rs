use crate::PathType;

use serde::{Deserialize, Serialize};

/// The logged-in demo user, as handed back by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: String,
    pub username: String,
    #[serde(rename = "pathType", default)]
    pub path_type: Option<PathType>,
}
