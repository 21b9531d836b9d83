use serde::Deserialize;

/// Query parameters for `GET /get_live_statuses`
#[derive(Debug, Default, Deserialize)]
pub struct LiveStatusesQuery {
    #[serde(default)]
    pub format: LiveStatusesFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveStatusesFormat {
    /// Latest status per tourist id
    #[default]
    Statuses,
    /// The CSV rows as loaded
    Rows,
}
