use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur during calls to the prediction service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
