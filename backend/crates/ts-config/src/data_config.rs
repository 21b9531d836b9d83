use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FRONTEND_DIR, DEFAULT_SIMULATION_CSV,
    DEFAULT_USERS_FILE,
};

use std::path::PathBuf;

use serde::Deserialize;

/// Files the relay reads and writes. Relative paths resolve against the
/// working directory of the server process.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// CSV snapshot of simulated paths, loaded once at startup
    pub simulation_csv: String,
    /// Flat JSON array of registered users
    pub users_file: String,
    /// Pre-built front-end bundle served as static files
    pub frontend_dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            simulation_csv: String::from(DEFAULT_SIMULATION_CSV),
            users_file: String::from(DEFAULT_USERS_FILE),
            frontend_dir: String::from(DEFAULT_FRONTEND_DIR),
        }
    }
}

impl DataConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("data.simulation_csv", &self.simulation_csv),
            ("data.users_file", &self.users_file),
            ("data.frontend_dir", &self.frontend_dir),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::data(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }

    pub fn simulation_csv_path(&self) -> PathBuf {
        PathBuf::from(&self.simulation_csv)
    }

    pub fn users_file_path(&self) -> PathBuf {
        PathBuf::from(&self.users_file)
    }

    pub fn frontend_path(&self) -> PathBuf {
        PathBuf::from(&self.frontend_dir)
    }
}
