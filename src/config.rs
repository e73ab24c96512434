//! Planner configuration.
//!
//! Optional TOML file; every key falls back to the built-in default:
//!
//! ```toml
//! vessel = "OSV_SIM"
//! steps-per-segment = 60
//! step-interval-secs = 60
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::TimeDelta;
use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::engine::navigation::DEFAULT_STEPS;
use crate::engine::planner::{VoyagePlanner, DEFAULT_VESSEL};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io { source: std::io::Error, path: PathBuf },
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse { source: toml::de::Error, path: PathBuf },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Vessel identifier stamped on every track point.
    pub vessel: String,
    /// Interpolated positions per route segment. At least 2.
    pub steps_per_segment: usize,
    /// Seconds between consecutive track points. Must be positive.
    pub step_interval_secs: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            vessel: DEFAULT_VESSEL.to_string(),
            steps_per_segment: DEFAULT_STEPS,
            step_interval_secs: 60,
        }
    }
}

impl PlannerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading planner config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            source,
            path: path.to_path_buf(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vessel.trim().is_empty() {
            return Err(ConfigError::Invalid("vessel must not be empty".into()));
        }
        if self.steps_per_segment < 2 {
            return Err(ConfigError::Invalid(format!(
                "steps-per-segment must be at least 2, got {}",
                self.steps_per_segment
            )));
        }
        if self.step_interval_secs == 0 {
            return Err(ConfigError::Invalid("step-interval-secs must be positive".into()));
        }
        Ok(())
    }

    pub fn planner(&self) -> VoyagePlanner {
        VoyagePlanner::new(
            self.vessel.clone(),
            self.steps_per_segment,
            TimeDelta::seconds(i64::from(self.step_interval_secs)),
        )
    }
}
