use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_URL, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TICK_INTERVAL_MS, DEFAULT_TRAIL_LENGTH,
    MAX_POLL_INTERVAL_MS, MAX_REQUEST_TIMEOUT_SECS, MAX_TICK_INTERVAL_MS, MAX_TRAIL_LENGTH,
    MIN_POLL_INTERVAL_MS, MIN_REQUEST_TIMEOUT_SECS, MIN_TICK_INTERVAL_MS, MIN_TRAIL_LENGTH,
};

use std::time::Duration;

use serde::Deserialize;

/// Settings of the simulator and dashboard clients.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Base URL of the prediction service
    pub api_url: String,
    /// Period of each tourist's location-update loop
    pub tick_interval_ms: u64,
    /// Period of alert and live-status polling
    pub poll_interval_ms: u64,
    /// Positions kept per tourist trail
    pub trail_length: usize,
    pub request_timeout_secs: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            trail_length: DEFAULT_TRAIL_LENGTH,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::simulation(format!(
                "simulation.api_url must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(ConfigError::simulation(format!(
                "simulation.tick_interval_ms must be {}-{}, got {}",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, self.tick_interval_ms
            )));
        }

        if !(MIN_POLL_INTERVAL_MS..=MAX_POLL_INTERVAL_MS).contains(&self.poll_interval_ms) {
            return Err(ConfigError::simulation(format!(
                "simulation.poll_interval_ms must be {}-{}, got {}",
                MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS, self.poll_interval_ms
            )));
        }

        if !(MIN_TRAIL_LENGTH..=MAX_TRAIL_LENGTH).contains(&self.trail_length) {
            return Err(ConfigError::simulation(format!(
                "simulation.trail_length must be {}-{}, got {}",
                MIN_TRAIL_LENGTH, MAX_TRAIL_LENGTH, self.trail_length
            )));
        }

        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS)
            .contains(&self.request_timeout_secs)
        {
            return Err(ConfigError::simulation(format!(
                "simulation.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
