pub mod error;
pub mod models;
pub mod navigation;
pub mod planner;
pub mod waypoints;
