use crate::ClientError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Config error: {0}")]
    Config(#[from] ts_config::ConfigError),

    #[error("Please select at least one tourist {location}")]
    NoSelection { location: ErrorLocation },

    #[error("No active tourists. Start monitoring first! {location}")]
    NoActiveSimulations { location: ErrorLocation },

    #[error("Tourist {tourist_id} is not being simulated {location}")]
    UnknownTourist {
        tourist_id: String,
        location: ErrorLocation,
    },

    #[error("Tourist {tourist_id} has no known position {location}")]
    NoPosition {
        tourist_id: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file {path} is malformed: {source}")]
    Session {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SimError {
    #[track_caller]
    pub fn no_selection() -> Self {
        Self::NoSelection {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_active_simulations() -> Self {
        Self::NoActiveSimulations {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_tourist(tourist_id: impl Into<String>) -> Self {
        Self::UnknownTourist {
            tourist_id: tourist_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_position(tourist_id: impl Into<String>) -> Self {
        Self::NoPosition {
            tourist_id: tourist_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A request the remote side answered but refused
    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
