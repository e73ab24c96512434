use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::engine::error::CoordinateError;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Builds a coordinate without range checks. Callers feeding user input
    /// should go through [`Coordinate::try_new`].
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a coordinate, rejecting latitudes outside [-90, 90] and
    /// longitudes outside [-180, 180] (NaN included).
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Copy of this coordinate with both axes rounded to `decimals` places.
    ///
    /// Rounds the exact binary value through its decimal expansion, so
    /// `0.123455` (stored just below the tie) becomes `0.12345`.
    pub fn rounded(&self, decimals: usize) -> Self {
        Self {
            lat: round_decimal(self.lat, decimals),
            lon: round_decimal(self.lon, decimals),
        }
    }
}

fn round_decimal(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Ordered travel sequence `[start, waypoints.., end]`.
///
/// A route built through [`Route::from_legs`] always holds at least two
/// points. [`Route::from_points`] accepts anything and leaves the length
/// check to the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    points: Vec<Coordinate>,
}

impl Route {
    pub fn from_legs(start: Coordinate, waypoints: &[Coordinate], end: Coordinate) -> Self {
        let mut points = Vec::with_capacity(waypoints.len() + 2);
        points.push(start);
        points.extend_from_slice(waypoints);
        points.push(end);
        Self { points }
    }

    pub fn from_points(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of straight legs between consecutive points.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// One simulated vessel position in the exported track.
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackPoint {
    #[serde(serialize_with = "serialize_utc_z")]
    pub timestamp: DateTime<Utc>,
    pub vessel: String,
    pub phase: String,
    pub latitude: f64,
    pub longitude: f64,
    pub speed_knots: f64,
    pub nav_status: String,
}

impl TrackPoint {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// ISO-8601 with a trailing `Z` and only as many fractional digits as needed.
fn serialize_utc_z<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Everything derived from one route and speed.
#[derive(Debug, Clone, PartialEq)]
pub struct VoyageResult {
    pub track: Vec<TrackPoint>,
    /// Total great-circle distance in nautical miles
    pub total_distance_nm: f64,
    pub eta: DateTime<Utc>,
}
