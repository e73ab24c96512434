use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, info, warn};

use crate::engine::error::VoyageError;
use crate::engine::models::{Coordinate, TrackPoint, VoyageResult};
use crate::engine::navigation::{haversine_nm, interpolate, path_length_nm, DEFAULT_STEPS};

pub const DEFAULT_VESSEL: &str = "OSV_SIM";
pub const TRANSIT_PHASE: &str = "Transit";
pub const UNDERWAY_STATUS: &str = "Underway";
/// Decimal places kept on emitted track positions (~1.1 m)
pub const TRACK_DECIMALS: usize = 5;

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Straight-leg voyage simulator.
///
/// Holds only settings, so one planner can serve any number of routes.
#[derive(Debug, Clone, PartialEq)]
pub struct VoyagePlanner {
    pub vessel: String,
    /// Interpolated positions emitted per leg
    pub steps_per_segment: usize,
    /// Clock advance between consecutive track points
    pub step_interval: TimeDelta,
}

impl Default for VoyagePlanner {
    fn default() -> Self {
        Self {
            vessel: DEFAULT_VESSEL.to_string(),
            steps_per_segment: DEFAULT_STEPS,
            step_interval: TimeDelta::minutes(1),
        }
    }
}

impl VoyagePlanner {
    pub fn new(vessel: impl Into<String>, steps_per_segment: usize, step_interval: TimeDelta) -> Self {
        Self { vessel: vessel.into(), steps_per_segment, step_interval }
    }

    /// Plans a voyage departing at `departure`.
    ///
    /// Distance and ETA use the unrounded route; only the emitted track
    /// positions are rounded. The same inputs always give the same result.
    pub fn plan(
        &self,
        route: &[Coordinate],
        speed_knots: f64,
        departure: DateTime<Utc>,
    ) -> Result<VoyageResult, VoyageError> {
        if route.len() < 2 {
            return Err(VoyageError::RouteTooShort(route.len()));
        }
        if !speed_knots.is_finite() || speed_knots <= 0.0 {
            return Err(VoyageError::InvalidSpeed(speed_knots));
        }
        if self.steps_per_segment < 2 {
            return Err(VoyageError::InvalidStepCount(self.steps_per_segment));
        }
        if self.step_interval <= TimeDelta::zero() {
            return Err(VoyageError::InvalidStepInterval(self.step_interval));
        }

        info!(
            "Planning voyage over {} segments at {} kn for {}",
            route.len() - 1,
            speed_knots,
            self.vessel
        );

        let total_distance_nm = path_length_nm(route);
        let eta = Self::estimate_arrival(departure, total_distance_nm, speed_knots)?;
        let track = self.build_track(route, speed_knots, departure)?;

        info!(
            "Voyage planned: {:.2} NM, {} track points, ETA {}",
            total_distance_nm,
            track.len(),
            eta
        );

        Ok(VoyageResult { track, total_distance_nm, eta })
    }

    fn estimate_arrival(
        departure: DateTime<Utc>,
        distance_nm: f64,
        speed_knots: f64,
    ) -> Result<DateTime<Utc>, VoyageError> {
        let hours = distance_nm / speed_knots;
        let micros = (hours * MICROS_PER_HOUR).round();
        if !micros.is_finite() || micros >= i64::MAX as f64 {
            return Err(VoyageError::EtaOutOfRange { hours });
        }

        departure
            .checked_add_signed(TimeDelta::microseconds(micros as i64))
            .ok_or(VoyageError::EtaOutOfRange { hours })
    }

    fn build_track(
        &self,
        route: &[Coordinate],
        speed_knots: f64,
        departure: DateTime<Utc>,
    ) -> Result<Vec<TrackPoint>, VoyageError> {
        let mut track = Vec::with_capacity((route.len() - 1) * self.steps_per_segment);
        let mut time = departure;

        for (segment, leg) in route.windows(2).enumerate() {
            let (from, to) = (leg[0], leg[1]);
            let leg_nm = haversine_nm(&from, &to);
            if leg_nm == 0.0 {
                warn!("Segment {} has zero length at {:?}", segment, from);
            }
            debug!("Segment {}: {:?} -> {:?}, {:.3} NM", segment, from, to, leg_nm);

            for position in interpolate(from, to, self.steps_per_segment)? {
                if !track.is_empty() {
                    time = time
                        .checked_add_signed(self.step_interval)
                        .ok_or(VoyageError::TrackOutOfRange { index: track.len() })?;
                }
                let rounded = position.rounded(TRACK_DECIMALS);
                track.push(TrackPoint {
                    timestamp: time,
                    vessel: self.vessel.clone(),
                    phase: TRANSIT_PHASE.to_string(),
                    latitude: rounded.lat,
                    longitude: rounded.lon,
                    speed_knots,
                    nav_status: UNDERWAY_STATUS.to_string(),
                });
            }
        }

        Ok(track)
    }
}

/// Plans a voyage departing now with the default planner settings.
///
/// Reads the wall clock, so two calls give different timestamps and ETAs.
/// Use [`VoyagePlanner::plan`] when the departure has to be fixed.
pub fn generate_voyage(route: &[Coordinate], speed_knots: f64) -> Result<VoyageResult, VoyageError> {
    VoyagePlanner::default().plan(route, speed_knots, Utc::now())
}
