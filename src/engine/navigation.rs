use crate::engine::error::VoyageError;
use crate::engine::models::Coordinate;

/// Mean Earth radius used for every distance in the planner (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Kilometres per nautical mile
pub const KM_PER_NM: f64 = 1.852;
/// Track points generated per route segment
pub const DEFAULT_STEPS: usize = 60;

/// Great-circle distance between two coordinates in nautical miles (haversine).
///
/// Inputs are taken as-is; out-of-range coordinates are the caller's problem.
pub fn haversine_nm(start: &Coordinate, end: &Coordinate) -> f64 {
    let start_lat = start.lat.to_radians();
    let end_lat = end.lat.to_radians();
    let d_lat = (end.lat - start.lat).to_radians();
    let d_lon = (end.lon - start.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + start_lat.cos() * end_lat.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c / KM_PER_NM
}

/// Sum of the leg distances along `points`, in nautical miles.
pub fn path_length_nm(points: &[Coordinate]) -> f64 {
    points.windows(2).map(|leg| haversine_nm(&leg[0], &leg[1])).sum()
}

/// Evenly spaced positions from `start` to `end`, linear in degree space.
///
/// Returns exactly `steps` points; the first is `start` and the last is `end`,
/// bit for bit. Not geodesic: degrades near the poles and does not handle a
/// leg crossing the antimeridian.
pub fn interpolate(start: Coordinate, end: Coordinate, steps: usize) -> Result<Vec<Coordinate>, VoyageError> {
    if steps < 2 {
        return Err(VoyageError::InvalidStepCount(steps));
    }

    let last = steps - 1;
    let d_lat = end.lat - start.lat;
    let d_lon = end.lon - start.lon;

    let points = (0..steps)
        .map(|i| {
            if i == last {
                // start + (end - start) can miss `end` by an ulp
                return end;
            }
            let t = i as f64 / last as f64;
            Coordinate::new(start.lat + d_lat * t, start.lon + d_lon * t)
        })
        .collect();

    Ok(points)
}
