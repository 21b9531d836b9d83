use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid path type: {value} {location}")]
    InvalidPathType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid safety status: {value} {location}")]
    InvalidSafetyStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid path selection '{value}', expected <tourist_id>|<path_type> {location}")]
    InvalidSelection {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
