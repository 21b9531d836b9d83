//! Read-only views over the simulation snapshot.

use crate::{AppState, LiveStatusesFormat, LiveStatusesQuery, LiveStatusesResponse};

use ts_core::TouristIds;

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /get_tourist_ids
pub async fn get_tourist_ids(State(state): State<AppState>) -> Json<TouristIds> {
    Json(state.snapshot.tourist_ids())
}

/// GET /get_live_statuses
///
/// `?format=rows` returns the raw CSV rows instead of the status map.
pub async fn get_live_statuses(
    State(state): State<AppState>,
    Query(query): Query<LiveStatusesQuery>,
) -> Json<LiveStatusesResponse> {
    let response = match query.format {
        LiveStatusesFormat::Statuses => {
            LiveStatusesResponse::Statuses(state.snapshot.live_statuses())
        }
        LiveStatusesFormat::Rows => LiveStatusesResponse::Rows(state.snapshot.rows().to_vec()),
    };

    Json(response)
}
