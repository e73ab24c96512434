// Waypoint list loader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::engine::error::CoordinateError;
use crate::engine::models::Coordinate;
use crate::engine::waypoints::WaypointList;

#[derive(Error, Debug)]
pub enum WaypointFileError {
    #[error("could not open waypoint file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed waypoint file: {0}")]
    Csv(#[from] csv::Error),
    #[error("waypoint on row {row}: {source}")]
    OutOfRange { row: usize, source: CoordinateError },
}

#[derive(Debug, Deserialize)]
struct WaypointRow {
    #[serde(alias = "latitude")]
    lat: f64,
    #[serde(alias = "longitude", alias = "lng")]
    lon: f64,
}

/// Loads waypoints from a CSV file with a `lat,lon` header, in file order.
pub fn load_from_csv<P: AsRef<Path>>(path: P) -> Result<WaypointList, WaypointFileError> {
    info!("Loading waypoints from CSV: {:?}", path.as_ref());
    let file = File::open(path)?;
    let waypoints = read_waypoints(file)?;
    info!("Loaded {} waypoints", waypoints.len());
    Ok(waypoints)
}

/// Parses waypoint rows from any reader. Blank lines are skipped and
/// surrounding whitespace is ignored.
pub fn read_waypoints<R: Read>(reader: R) -> Result<WaypointList, WaypointFileError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut waypoints = WaypointList::new();
    for (index, row) in reader.deserialize::<WaypointRow>().enumerate() {
        let row_number = index + 1;
        let WaypointRow { lat, lon } = row?;
        let coord = Coordinate::try_new(lat, lon)
            .map_err(|source| WaypointFileError::OutOfRange { row: row_number, source })?;
        waypoints.push(coord);
    }

    Ok(waypoints)
}
