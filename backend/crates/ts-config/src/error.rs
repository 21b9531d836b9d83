use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("Config", message)
    }

    #[track_caller]
    pub fn data<S: Into<String>>(message: S) -> Self {
        Self::generic("Data", message)
    }

    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::generic("Logging", message)
    }

    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::generic("Server", message)
    }

    #[track_caller]
    pub fn simulation<S: Into<String>>(message: S) -> Self {
        Self::generic("Simulation", message)
    }

    #[track_caller]
    fn generic<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
