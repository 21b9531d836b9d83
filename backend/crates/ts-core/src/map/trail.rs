use crate::{LiveStatuses, PathPoint};

use std::collections::{BTreeMap, VecDeque};

pub const DEFAULT_TRAIL_LENGTH: usize = 50;

/// Rolling window of recent positions per tourist, fed by status polls.
#[derive(Debug, Clone)]
pub struct TrailBook {
    capacity: usize,
    trails: BTreeMap<String, VecDeque<PathPoint>>,
}

impl TrailBook {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            trails: BTreeMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append the current position of every tourist in the poll.
    ///
    /// Tourists missing from a poll keep their trail.
    pub fn record(&mut self, statuses: &LiveStatuses) {
        for (id, status) in statuses {
            self.push(id, status.position());
        }
    }

    pub fn push(&mut self, id: &str, point: PathPoint) {
        let trail = self.trails.entry(id.to_string()).or_default();
        trail.push_back(point);
        while trail.len() > self.capacity {
            trail.pop_front();
        }
    }

    pub fn trail(&self, id: &str) -> Option<&VecDeque<PathPoint>> {
        self.trails.get(id)
    }

    pub fn len_of(&self, id: &str) -> usize {
        self.trails.get(id).map_or(0, VecDeque::len)
    }

    /// A polyline needs at least two points.
    pub fn drawable(&self, id: &str) -> bool {
        self.len_of(id) > 1
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.trails.keys().map(String::as_str)
    }
}

impl Default for TrailBook {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_LENGTH)
    }
}
