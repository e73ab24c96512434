use std::path::PathBuf;
use std::process;

use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;
use voyage_planner::config::PlannerConfig;
use voyage_planner::{export, parsers, Coordinate, WaypointList};

/// Plan a straight-leg voyage and simulate the vessel track.
#[derive(Debug, Parser)]
#[command(name = "voyage_planner")]
struct Cli {
    /// Departure position as `LAT,LON` in decimal degrees.
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    start: Coordinate,

    /// Arrival position as `LAT,LON` in decimal degrees.
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    end: Coordinate,

    /// Intermediate waypoint as `LAT,LON`. Repeat in travel order.
    #[arg(long = "waypoint", value_parser = parse_coordinate, allow_hyphen_values = true)]
    waypoints: Vec<Coordinate>,

    /// CSV file of waypoints (`lat,lon` header), visited before any `--waypoint`.
    #[arg(long)]
    waypoints_file: Option<PathBuf>,

    /// Average speed over ground in knots.
    #[arg(long, default_value_t = 10.0)]
    speed: f64,

    /// Departure time (RFC 3339). Defaults to now.
    #[arg(long)]
    departure: Option<DateTime<Utc>>,

    /// Planner settings file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the simulated track as CSV to this file.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{value}'"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude '{lat}': {e}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("bad longitude '{lon}': {e}"))?;
    Coordinate::try_new(lat, lon).map_err(|e| e.to_string())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };
    let planner = config.planner();

    let mut waypoints = match &cli.waypoints_file {
        Some(path) => parsers::waypoints::load_from_csv(path)?,
        None => WaypointList::new(),
    };
    waypoints.extend(cli.waypoints.iter().copied());

    let route = waypoints.route(cli.start, cli.end);
    let departure = cli.departure.unwrap_or_else(Utc::now);
    info!("Route has {} points, departing {}", route.len(), departure);

    let result = planner.plan(route.points(), cli.speed, departure)?;

    println!("Distance (NM): {:.1}", result.total_distance_nm);
    println!("Speed (kn): {}", cli.speed);
    println!("ETA: {}", result.eta.format("%Y-%m-%d %H:%M"));
    println!("Track points: {}", result.track.len());

    if let Some(path) = &cli.output {
        export::save_track(path, &result.track)?;
        println!("Track written to {}", path.display());
    }

    Ok(())
}
