use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Any port is accepted; 0 lets the OS pick one.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host must not be empty"));
        }

        Ok(())
    }
}
