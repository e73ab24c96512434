use log::debug;

use crate::engine::models::{Coordinate, Route};

/// Caller-owned list of intermediate waypoints.
///
/// The planner never sees this list directly; it receives a [`Route`]
/// snapshot built from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointList {
    waypoints: Vec<Coordinate>,
}

impl WaypointList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, waypoint: Coordinate) {
        debug!("Adding waypoint {} at {:?}", self.waypoints.len() + 1, waypoint);
        self.waypoints.push(waypoint);
    }

    /// Removes the waypoint at `index`, shifting later ones down.
    /// Returns `None` when the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Coordinate> {
        if index >= self.waypoints.len() {
            return None;
        }
        Some(self.waypoints.remove(index))
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.waypoints.iter()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.waypoints
    }

    /// Snapshot route `[start] + waypoints + [end]`.
    pub fn route(&self, start: Coordinate, end: Coordinate) -> Route {
        Route::from_legs(start, &self.waypoints, end)
    }
}

impl Extend<Coordinate> for WaypointList {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        for waypoint in iter {
            self.push(waypoint);
        }
    }
}

impl FromIterator<Coordinate> for WaypointList {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self { waypoints: iter.into_iter().collect() }
    }
}
