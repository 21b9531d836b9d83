use ts_core::UserSummary;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserSummary,
}
