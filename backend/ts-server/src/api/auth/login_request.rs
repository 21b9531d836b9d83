use serde::Deserialize;

/// Body of `POST /login`: either key may identify the user.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, with = "super::string_or_number")]
    pub phone: Option<String>,
}
