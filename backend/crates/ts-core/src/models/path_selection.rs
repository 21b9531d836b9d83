use crate::{CoreError, CoreResult, PathType};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// A tourist path picked for simulation, written as `<tourist_id>|<path_type>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSelection {
    pub tourist_id: String,
    pub path_type: PathType,
}

impl PathSelection {
    pub fn new(tourist_id: impl Into<String>, path_type: PathType) -> Self {
        Self {
            tourist_id: tourist_id.into(),
            path_type,
        }
    }
}

impl fmt::Display for PathSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.tourist_id, self.path_type)
    }
}

impl FromStr for PathSelection {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let caller = Location::caller();
        let invalid = || CoreError::InvalidSelection {
            value: s.to_string(),
            location: ErrorLocation::from(caller),
        };

        let (id, kind) = s.split_once('|').ok_or_else(invalid)?;
        if id.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            tourist_id: id.to_string(),
            path_type: kind.parse()?,
        })
    }
}
