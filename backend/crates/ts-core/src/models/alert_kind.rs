use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Alert `type` as reported by the prediction service.
///
/// Unknown strings are kept verbatim so they survive a round trip, but they
/// count as neither anomaly nor SOS when scoring.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Anomaly,
    Sos,
    Other(String),
}

impl AlertKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Anomaly => "anomaly",
            Self::Sos => "sos",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for AlertKind {
    fn from(s: &str) -> Self {
        match s {
            "anomaly" => Self::Anomaly,
            "sos" => Self::Sos,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for AlertKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AlertKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AlertKind::from(s.as_str()))
    }
}
