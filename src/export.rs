//! CSV export of a simulated track.
//!
//! One header row, `timestamp,vessel,phase,latitude,longitude,speed_knots,nav_status`,
//! then one row per track point in emission order. Timestamps are UTC
//! ISO-8601 with a trailing `Z`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::engine::models::TrackPoint;

pub const CSV_HEADER: &str = "timestamp,vessel,phase,latitude,longitude,speed_knots,nav_status";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to create export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write track row: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes the track to `writer` and flushes it.
///
/// The header is written even for an empty track.
pub fn write_track<W: Write>(writer: W, track: &[TrackPoint]) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(CSV_HEADER.split(','))?;
    for point in track {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the track to a new file at `path`, replacing any existing one.
pub fn save_track<P: AsRef<Path>>(path: P, track: &[TrackPoint]) -> Result<(), ExportError> {
    info!("Exporting {} track points to {:?}", track.len(), path.as_ref());
    let file = File::create(path)?;
    write_track(file, track)
}

/// Renders the track as a CSV string.
pub fn track_to_csv(track: &[TrackPoint]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_track(&mut buffer, track)?;
    // csv only emits what serde gave it, all of which is UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
