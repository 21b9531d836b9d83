use crate::PathType;

use serde::{Deserialize, Serialize};

/// A registered demo user. Stored as-is, with no uniqueness checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhaar_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_type: Option<PathType>,
}

impl User {
    /// Username match takes effect only when a username was given, same for phone.
    pub fn matches(&self, username: Option<&str>, phone: Option<&str>) -> bool {
        let by_name = username.is_some_and(|name| !name.is_empty() && self.username == name);
        let by_phone = phone.is_some_and(|p| !p.is_empty() && self.phone == p);
        by_name || by_phone
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            username: self.username.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
}
