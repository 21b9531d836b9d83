use serde::Deserialize;

/// Body of `POST /register`. Every field is optional at the wire level so
/// missing values surface as a 400 with a readable message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, with = "super::string_or_number")]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub aadhaar_number: Option<String>,
    #[serde(default)]
    pub path_type: Option<String>,
}
