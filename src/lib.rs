pub mod config;
pub mod engine;
pub mod export;
pub mod parsers;

pub use engine::error::VoyageError;
pub use engine::models::{Coordinate, Route, TrackPoint, VoyageResult};
pub use engine::planner::{generate_voyage, VoyagePlanner};
pub use engine::waypoints::WaypointList;
