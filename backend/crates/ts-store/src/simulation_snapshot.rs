use crate::{StoreError, StoreResult};

use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};
use ts_core::{LiveStatuses, PathType, SafetyStatus, TouristIds, TouristStatus};

/// One CSV record keyed by header name.
pub type SimulationRow = BTreeMap<String, String>;

const TOURIST_ID: &str = "tourist_id";
const PATH_TYPE: &str = "path_type";
const LAT: &str = "lat";
const LON: &str = "lon";
const TIMESTAMP: &str = "timestamp";
const STATUS: &str = "status";
const USERNAME: &str = "username";

/// Simulated paths read once at startup. Never reloaded.
#[derive(Debug, Clone, Default)]
pub struct SimulationSnapshot {
    rows: Vec<SimulationRow>,
}

impl SimulationSnapshot {
    /// Load the snapshot from disk. A missing file gives an empty snapshot.
    pub fn load(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            warn!(
                "Simulation CSV {} not found, serving an empty snapshot",
                path.display()
            );
            return Ok(Self::default());
        }

        let file = std::fs::File::open(path).map_err(|e| StoreError::io(path, e))?;
        let snapshot = Self::from_reader(file).map_err(|e| StoreError::csv(path, e))?;

        info!(
            "Loaded {} simulation rows from {}",
            snapshot.len(),
            path.display()
        );
        Ok(snapshot)
    }

    /// Parse CSV text. Bytes that are not valid UTF-8 become U+FFFD instead
    /// of failing the load.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .byte_headers()?
            .iter()
            .map(lossy)
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.byte_records() {
            let record = record?;
            let row: SimulationRow = headers
                .iter()
                .cloned()
                .zip(record.iter().map(lossy))
                .collect();
            rows.push(row);
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[SimulationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct tourist ids by path type, in first-appearance order.
    ///
    /// Path types other than `normal` and `anomaly` are ignored.
    pub fn tourist_ids(&self) -> TouristIds {
        let mut ids = TouristIds::default();
        let mut seen_normal = HashSet::new();
        let mut seen_anomaly = HashSet::new();

        for row in &self.rows {
            let Some(id) = row.get(TOURIST_ID).filter(|id| !id.is_empty()) else {
                continue;
            };

            match row.get(PATH_TYPE).and_then(|kind| kind.parse().ok()) {
                Some(PathType::Normal) if seen_normal.insert(id.as_str()) => {
                    ids.normal.push(id.clone());
                }
                Some(PathType::Anomaly) if seen_anomaly.insert(id.as_str()) => {
                    ids.anomaly.push(id.clone());
                }
                _ => {}
            }
        }

        ids
    }

    /// Latest row of each tourist as a status record.
    ///
    /// The status comes from a `status` column when present, otherwise from
    /// the path type. Rows without usable coordinates are skipped.
    pub fn live_statuses(&self) -> LiveStatuses {
        let mut statuses = LiveStatuses::new();

        for row in &self.rows {
            let Some(id) = row.get(TOURIST_ID).filter(|id| !id.is_empty()) else {
                continue;
            };

            let coords = (
                row.get(LAT).and_then(|v| v.parse::<f64>().ok()),
                row.get(LON).and_then(|v| v.parse::<f64>().ok()),
            );
            let (Some(lat), Some(lon)) = coords else {
                debug!("Skipping row of tourist {} without coordinates", id);
                continue;
            };

            statuses.insert(
                id.clone(),
                TouristStatus {
                    lat,
                    lon,
                    status: row_status(row),
                    timestamp: row.get(TIMESTAMP).cloned().unwrap_or_default(),
                    username: row.get(USERNAME).cloned().unwrap_or_default(),
                },
            );
        }

        statuses
    }
}

fn row_status(row: &SimulationRow) -> SafetyStatus {
    if let Some(status) = row.get(STATUS).and_then(|s| s.parse().ok()) {
        return status;
    }

    row.get(PATH_TYPE)
        .and_then(|kind| kind.parse::<PathType>().ok())
        .map(SafetyStatus::from)
        .unwrap_or_default()
}

fn lossy(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}
