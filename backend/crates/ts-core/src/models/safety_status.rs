use crate::{CoreError, CoreResult, PathType};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SafetyStatus {
    #[default]
    Normal,
    Anomaly,
    Sos,
}

impl SafetyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Anomaly => "anomaly",
            Self::Sos => "sos",
        }
    }

    /// Anything but `normal` gets highlighted on the map.
    pub fn is_alerting(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl From<PathType> for SafetyStatus {
    fn from(path_type: PathType) -> Self {
        match path_type {
            PathType::Normal => Self::Normal,
            PathType::Anomaly => Self::Anomaly,
        }
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SafetyStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "normal" => Ok(Self::Normal),
            "anomaly" => Ok(Self::Anomaly),
            "sos" => Ok(Self::Sos),
            _ => Err(CoreError::InvalidSafetyStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
