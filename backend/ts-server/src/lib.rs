pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod routes;
pub mod static_files;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    tourists::{
        live_statuses_query::{LiveStatusesFormat, LiveStatusesQuery},
        live_statuses_response::LiveStatusesResponse,
        tourists::{get_live_statuses, get_tourist_ids},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
