use chrono::TimeDelta;
use thiserror::Error;

/// Position outside the valid latitude/longitude range.
#[derive(PartialEq, Clone, Copy, Debug, Error)]
pub enum CoordinateError {
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),
}

/// Rejected planner input. Every variant is an invalid-argument condition;
/// the planner never returns a partial result alongside one.
#[derive(PartialEq, Clone, Debug, Error)]
pub enum VoyageError {
    #[error("route needs at least 2 points, got {0}")]
    RouteTooShort(usize),
    #[error("speed must be a positive, finite number of knots, got {0}")]
    InvalidSpeed(f64),
    #[error("interpolation needs at least 2 steps, got {0}")]
    InvalidStepCount(usize),
    #[error("step interval must be positive, got {0}")]
    InvalidStepInterval(TimeDelta),
    #[error("ETA of {hours} hours from departure is outside the supported time range")]
    EtaOutOfRange { hours: f64 },
    #[error("track point {index} falls outside the supported time range")]
    TrackOutOfRange { index: usize },
}
