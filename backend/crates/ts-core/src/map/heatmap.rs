//! Incident heatmap built from tourist logs.

use crate::{SafetyStatus, TouristLogEntry};

use rand::Rng;
use serde::Serialize;

pub const SOS_INTENSITY: f64 = 1.0;
pub const ANOMALY_INTENSITY: f64 = 0.6;
pub const NORMAL_INTENSITY: f64 = 0.3;

/// Total jitter span in degrees; samples land within half of it on each axis.
pub const SPREAD_FACTOR: f64 = 0.02;
pub const REGIONAL_SAMPLES: usize = 15;
const DECAY_DIVISOR: f64 = 20.0;

/// Bounds padding ratio applied when fitting the view.
pub const BOUNDS_PADDING: f64 = 0.1;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HeatPoint {
    pub lat: f64,
    pub lon: f64,
    pub intensity: f64,
}

pub fn intensity_for(status: SafetyStatus) -> f64 {
    match status {
        SafetyStatus::Sos => SOS_INTENSITY,
        SafetyStatus::Anomaly => ANOMALY_INTENSITY,
        SafetyStatus::Normal => NORMAL_INTENSITY,
    }
}

pub fn heat_points<'a, I>(logs: I) -> Vec<HeatPoint>
where
    I: IntoIterator<Item = &'a TouristLogEntry>,
{
    logs.into_iter()
        .map(|log| HeatPoint {
            lat: log.lat,
            lon: log.lon,
            intensity: intensity_for(log.status),
        })
        .collect()
}

/// Spread every incident into a small cloud so the heat reads as a region.
///
/// Each input point is kept and followed by `REGIONAL_SAMPLES` jittered
/// copies whose intensity decays with the sample index.
pub fn regional_heatmap<R: Rng>(points: &[HeatPoint], rng: &mut R) -> Vec<HeatPoint> {
    let mut regional = Vec::with_capacity(points.len() * (REGIONAL_SAMPLES + 1));

    for point in points {
        regional.push(*point);

        for i in 0..REGIONAL_SAMPLES {
            let lat = point.lat + (rng.random::<f64>() - 0.5) * SPREAD_FACTOR;
            let lon = point.lon + (rng.random::<f64>() - 0.5) * SPREAD_FACTOR;
            let decay = 1.0 - (i as f64 / DECAY_DIVISOR);
            let intensity = point.intensity * (0.7 + rng.random::<f64>() * 0.3) * decay;
            regional.push(HeatPoint {
                lat,
                lon,
                intensity,
            });
        }
    }

    regional
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HeatmapBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl HeatmapBounds {
    /// Bounding box of the points, padded by `BOUNDS_PADDING` on every side.
    pub fn fit(points: &[HeatPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            south: first.lat,
            west: first.lon,
            north: first.lat,
            east: first.lon,
        };

        for p in &points[1..] {
            bounds.south = bounds.south.min(p.lat);
            bounds.north = bounds.north.max(p.lat);
            bounds.west = bounds.west.min(p.lon);
            bounds.east = bounds.east.max(p.lon);
        }

        let lat_pad = (bounds.north - bounds.south) * BOUNDS_PADDING;
        let lon_pad = (bounds.east - bounds.west) * BOUNDS_PADDING;

        Some(Self {
            south: bounds.south - lat_pad,
            west: bounds.west - lon_pad,
            north: bounds.north + lat_pad,
            east: bounds.east + lon_pad,
        })
    }
}
