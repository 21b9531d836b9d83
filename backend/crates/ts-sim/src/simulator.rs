//! Starts, tracks and stops the simulations of one monitoring session.

use crate::{SharedSimulation, SimError, SimResult, Simulation, TouristApi, run_simulation};

use ts_core::{PathPoint, PathSelection, ShutdownCoordinator};

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

const IDLE: &str = "Idle";
const DEFAULT_USERNAME: &str = "Unknown";

pub struct Simulator {
    api: Arc<dyn TouristApi>,
    tick_interval: Duration,
    shutdown: ShutdownCoordinator,
    simulations: BTreeMap<String, SharedSimulation>,
    tasks: Vec<JoinHandle<()>>,
    status: String,
}

impl Simulator {
    pub fn new(api: Arc<dyn TouristApi>, tick_interval: Duration) -> Self {
        Self {
            api,
            tick_interval,
            shutdown: ShutdownCoordinator::new(),
            simulations: BTreeMap::new(),
            tasks: Vec::new(),
            status: String::from(IDLE),
        }
    }

    /// Human-readable progress line
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn active_ids(&self) -> Vec<String> {
        self.simulations.keys().cloned().collect()
    }

    /// Start one loop per selection, replacing any previous session.
    ///
    /// Clearing old alerts is best effort. Failing to reset the service or
    /// fetch a path aborts the start.
    pub async fn start_monitoring(
        &mut self,
        selections: &[PathSelection],
        username: Option<&str>,
    ) -> SimResult<usize> {
        if selections.is_empty() {
            return Err(SimError::no_selection());
        }

        self.stop_all().await;
        self.simulations.clear();

        if let Err(e) = self.api.clear_safety_alerts().await {
            error!("Error clearing alerts: {}", e);
        }

        self.status = format!("Starting {} simulations...", selections.len());
        info!("{}", self.status);
        self.api.reset_simulation().await?;

        let username = username.unwrap_or(DEFAULT_USERNAME);
        for selection in selections {
            let response = self.api.get_path(selection, username).await?;
            let simulation: SharedSimulation = Arc::new(Mutex::new(Simulation::new(
                selection.tourist_id.clone(),
                response.path,
                response.path_type,
            )));

            self.tasks.push(tokio::spawn(run_simulation(
                Arc::clone(&self.api),
                Arc::clone(&simulation),
                self.tick_interval,
                self.shutdown.subscribe_guard(),
            )));
            self.simulations
                .insert(selection.tourist_id.clone(), simulation);
        }

        self.status = format!("{} tourists are now being monitored.", selections.len());
        info!("{}", self.status);

        Ok(selections.len())
    }

    /// Raise an SOS at the tourist's last visited point.
    pub async fn send_sos(&mut self, tourist_id: &str) -> SimResult<PathPoint> {
        let position = self
            .simulation(tourist_id)?
            .lock()
            .await
            .current_position()
            .ok_or_else(|| SimError::no_position(tourist_id))?;

        self.api.send_sos(tourist_id, position).await?;

        self.status = format!("SOS sent for Tourist {}", tourist_id);
        info!("{}", self.status);
        Ok(position)
    }

    pub async fn resolve_sos(&mut self, tourist_id: &str) -> SimResult<()> {
        self.simulation(tourist_id)?;
        self.api.resolve_sos(tourist_id).await?;

        self.status = format!("SOS resolved for Tourist {}", tourist_id);
        info!("{}", self.status);
        Ok(())
    }

    /// Copies of every tracked simulation
    pub async fn snapshot(&self) -> Vec<Simulation> {
        let mut out = Vec::with_capacity(self.simulations.len());
        for simulation in self.simulations.values() {
            out.push(simulation.lock().await.clone());
        }
        out
    }

    pub async fn all_completed(&self) -> bool {
        for simulation in self.simulations.values() {
            if !simulation.lock().await.is_complete() {
                return false;
            }
        }
        true
    }

    /// Wait for every loop to finish on its own.
    pub async fn wait(&mut self) {
        for task in self.tasks.drain(..) {
            if let Err(e) = task.await {
                error!("Simulation task failed: {}", e);
            }
        }
    }

    /// Cancel every running loop and wait for them to exit.
    pub async fn stop_all(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        self.shutdown.shutdown();
        self.wait().await;
        self.shutdown = ShutdownCoordinator::new();
    }

    fn simulation(&self, tourist_id: &str) -> SimResult<&SharedSimulation> {
        if self.simulations.is_empty() {
            return Err(SimError::no_active_simulations());
        }
        self.simulations
            .get(tourist_id)
            .ok_or_else(|| SimError::unknown_tourist(tourist_id))
    }
}
