pub mod live_statuses_query;
pub mod live_statuses_response;
#[allow(clippy::module_inception)]
pub mod tourists;
