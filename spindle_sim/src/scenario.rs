// spindle_sim/src/scenario.rs

//! Loading and validation of scenario TOML files.

use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::Deserialize;
use spindle_core::config::{ConfigError, RangefinderConfig};
use std::path::Path;
use thiserror::Error;

use crate::world::PlanarWorld;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to load or parse scenario file: {0}")]
    Parse(#[from] figment::Error),

    #[error("invalid sensor configuration: {0}")]
    InvalidSensor(#[from] ConfigError),

    #[error("invalid [simulation] section: {0}")]
    InvalidSimulation(String),
}

/// Root of the data parsed from a scenario TOML file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)] // Use default if the [simulation] section is missing
    pub simulation: Simulation,

    #[serde(default)]
    pub sensor: SensorPlacement,

    #[serde(default)]
    pub world: PlanarWorld,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Simulation {
    /// Duration of the simulation in seconds.
    pub duration_seconds: f64,
    /// Fixed host tick rate driving the sensor.
    pub tick_rate_hz: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            duration_seconds: 10.0,
            tick_rate_hz: 60.0,
        }
    }
}

/// Where the sensor sits in the world, and its device parameters.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorPlacement {
    /// World position `[x, y, z]` of the sensor origin.
    #[serde(default)]
    pub position: [f64; 3],
    /// Reference heading in degrees (the sweep's zero-angle direction).
    #[serde(default)]
    pub heading_deg: f64,
    #[serde(default)]
    pub rangefinder: RangefinderConfig,
}

impl Default for SensorPlacement {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            heading_deg: 0.0,
            rangefinder: RangefinderConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Checks everything that would otherwise fail deep inside the run.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.simulation.tick_rate_hz <= 0.0 || !self.simulation.tick_rate_hz.is_finite() {
            return Err(ScenarioError::InvalidSimulation(format!(
                "tick rate must be positive, got {} Hz",
                self.simulation.tick_rate_hz
            )));
        }
        if self.simulation.duration_seconds < 0.0 {
            return Err(ScenarioError::InvalidSimulation(format!(
                "duration must be non-negative, got {} s",
                self.simulation.duration_seconds
            )));
        }
        self.sensor.rangefinder.validate()?;
        Ok(())
    }
}

/// Loads and validates a scenario file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ScenarioError> {
    let config: ScenarioConfig = Figment::new().merge(Toml::file(path)).extract()?;
    config.validate()?;
    Ok(config)
}
