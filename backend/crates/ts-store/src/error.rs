use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("CSV error in {path}: {source} {location}")]
    Csv {
        path: PathBuf,
        source: csv::Error,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
