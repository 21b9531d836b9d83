use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DataConfig, LoggingConfig, SESSION_FILE_NAME, ServerConfig, SimulationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TS_CONFIG_DIR env var, else use ./.tourist-safety/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TS_CONFIG_DIR env var > ./.tourist-safety/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.data.validate()?;
        self.simulation.validate()?;

        if let Some(file) = &self.logging.file {
            let path = Path::new(file);
            if file.trim().is_empty() || path.is_absolute() || file.contains("..") {
                return Err(ConfigError::logging(
                    "logging.file must be a relative file name without '..'",
                ));
            }
        }

        Ok(())
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let log_dir = Self::config_dir()?.join(&self.logging.dir);
        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir).map_err(|e| ConfigError::Io {
                path: log_dir.clone(),
                source: e,
            })?;
        }

        Ok(Some(log_dir.join(file)))
    }

    /// Where the simulator keeps the logged-in user between invocations.
    pub fn session_path() -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(SESSION_FILE_NAME))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  data: csv={}, users={}, frontend={}",
            self.data.simulation_csv, self.data.users_file, self.data.frontend_dir
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  simulation: api={}, tick={}ms, poll={}ms, trail={}, timeout={}s",
            self.simulation.api_url,
            self.simulation.tick_interval_ms,
            self.simulation.poll_interval_ms,
            self.simulation.trail_length,
            self.simulation.request_timeout_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server; hosting platforms inject a bare PORT
        Self::apply_env_parse("PORT", &mut self.server.port);
        Self::apply_env_string("TS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TS_SERVER_PORT", &mut self.server.port);

        // Data
        Self::apply_env_string("TS_DATA_SIMULATION_CSV", &mut self.data.simulation_csv);
        Self::apply_env_string("TS_DATA_USERS_FILE", &mut self.data.users_file);
        Self::apply_env_string("TS_DATA_FRONTEND_DIR", &mut self.data.frontend_dir);

        // Logging
        Self::apply_env_parse("TS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TS_LOG_FILE", &mut self.logging.file);

        // Simulation
        Self::apply_env_string("TS_SIM_API_URL", &mut self.simulation.api_url);
        Self::apply_env_parse(
            "TS_SIM_TICK_INTERVAL_MS",
            &mut self.simulation.tick_interval_ms,
        );
        Self::apply_env_parse(
            "TS_SIM_POLL_INTERVAL_MS",
            &mut self.simulation.poll_interval_ms,
        );
        Self::apply_env_parse("TS_SIM_TRAIL_LENGTH", &mut self.simulation.trail_length);
        Self::apply_env_parse(
            "TS_SIM_REQUEST_TIMEOUT_SECS",
            &mut self.simulation.request_timeout_secs,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
