mod config;
mod data_config;
mod error;
mod log_level;
pub mod logger;
mod logging_config;
mod server_config;
mod simulation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use data_config::DataConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use simulation_config::SimulationConfig;

const CONFIG_DIR_ENV: &str = "TS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".tourist-safety";
const CONFIG_FILE_NAME: &str = "config.toml";
const SESSION_FILE_NAME: &str = "session.json";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;

const DEFAULT_SIMULATION_CSV: &str = "simulation_paths.csv";
const DEFAULT_USERS_FILE: &str = "authUsers.json";
const DEFAULT_FRONTEND_DIR: &str = "live-dashboard/out";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_API_URL: &str = "https://sih-repo.onrender.com";

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1500;
pub const MIN_TICK_INTERVAL_MS: u64 = 100;
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;
pub const MIN_POLL_INTERVAL_MS: u64 = 500;
pub const MAX_POLL_INTERVAL_MS: u64 = 60_000;

pub const DEFAULT_TRAIL_LENGTH: usize = 50;
pub const MIN_TRAIL_LENGTH: usize = 1;
pub const MAX_TRAIL_LENGTH: usize = 1000;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;
