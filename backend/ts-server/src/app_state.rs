use crate::error::Result as ServerErrorResult;

use ts_config::Config;
use ts_core::ShutdownCoordinator;
use ts_store::{SimulationSnapshot, UserRepository};

use std::path::PathBuf;
use std::sync::Arc;

/// Shared state of every handler. The snapshot is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<SimulationSnapshot>,
    pub users: Arc<UserRepository>,
    pub frontend_dir: Arc<PathBuf>,
    pub shutdown: ShutdownCoordinator,
}

impl AppState {
    pub async fn from_config(
        config: &Config,
        shutdown: ShutdownCoordinator,
    ) -> ServerErrorResult<Self> {
        let snapshot = SimulationSnapshot::load(&config.data.simulation_csv_path())?;
        let users = UserRepository::open(config.data.users_file_path()).await?;

        Ok(Self {
            snapshot: Arc::new(snapshot),
            users: Arc::new(users),
            frontend_dir: Arc::new(config.data.frontend_path()),
            shutdown,
        })
    }
}
