//! One simulated tourist walking its path on a fixed-period timer.

use crate::{LocationUpdate, PredictRequest, TouristApi};

use ts_core::{PathPoint, PathType, ShutdownGuard};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationState {
    Idle,
    Running,
    Completed,
}

#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    pub tourist_id: String,
    pub path: Vec<PathPoint>,
    pub path_type: PathType,
    pub current_index: usize,
    pub state: SimulationState,
}

/// A simulation shared between its loop and the simulator
pub type SharedSimulation = Arc<Mutex<Simulation>>;

impl Simulation {
    pub fn new(tourist_id: impl Into<String>, path: Vec<PathPoint>, path_type: PathType) -> Self {
        Self {
            tourist_id: tourist_id.into(),
            path,
            path_type,
            current_index: 0,
            state: SimulationState::Idle,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == SimulationState::Completed
    }

    /// Last visited point, or the start of the path before the first tick.
    pub fn current_position(&self) -> Option<PathPoint> {
        let index = self.current_index.saturating_sub(1);
        self.path.get(index).copied()
    }

    /// Requests for the point at the current index, if any remain.
    fn pending_step(&self) -> Option<(LocationUpdate, PredictRequest)> {
        if self.is_complete() {
            return None;
        }
        let point = self.path.get(self.current_index)?;

        let update = LocationUpdate {
            tourist_id: self.tourist_id.clone(),
            lat: point.lat,
            lon: point.lon,
            path_type: self.path_type,
        };
        let predict = PredictRequest {
            tourist_id: self.tourist_id.clone(),
            path_type: self.path_type,
            path: self.path[..=self.current_index].to_vec(),
        };

        Some((update, predict))
    }

    /// Move past the current point. Returns true once the path is exhausted.
    fn advance(&mut self) -> bool {
        self.current_index += 1;
        if self.current_index >= self.path.len() {
            self.state = SimulationState::Completed;
        }
        self.is_complete()
    }
}

/// Drive one simulation until its path is exhausted or shutdown fires.
///
/// The first tick fires one `period` after start. Failed calls are logged
/// and the loop advances anyway. A cancelled simulation stays `Running`.
pub async fn run_simulation(
    api: Arc<dyn TouristApi>,
    simulation: SharedSimulation,
    period: Duration,
    mut shutdown: ShutdownGuard,
) {
    let tourist_id = {
        let mut sim = simulation.lock().await;
        if sim.path.is_empty() {
            sim.state = SimulationState::Completed;
            info!("Tourist {} has an empty path, nothing to simulate", sim.tourist_id);
            return;
        }
        sim.state = SimulationState::Running;
        sim.tourist_id.clone()
    };

    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.wait() => {
                info!("Simulation of tourist {} cancelled", tourist_id);
                return;
            }
            _ = ticker.tick() => {}
        }

        let Some((update, predict)) = simulation.lock().await.pending_step() else {
            break;
        };

        if let Err(e) = api.update_location(&update).await {
            warn!("update_location failed for tourist {}: {}", tourist_id, e);
        }
        if let Err(e) = api.predict(&predict).await {
            warn!("predict failed for tourist {}: {}", tourist_id, e);
        }

        let mut sim = simulation.lock().await;
        let done = sim.advance();
        debug!(
            "Tourist {} at {}/{}",
            tourist_id,
            sim.current_index,
            sim.path.len()
        );
        if done {
            break;
        }
    }

    info!("Simulation of tourist {} completed", tourist_id);
}
