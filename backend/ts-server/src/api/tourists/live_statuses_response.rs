use ts_core::LiveStatuses;
use ts_store::SimulationRow;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LiveStatusesResponse {
    Statuses(LiveStatuses),
    Rows(Vec<SimulationRow>),
}
