// spindle_core/src/config.rs

use serde::Deserialize;
use thiserror::Error;

/// Errors detected when validating a [`RangefinderConfig`]. All of them are
/// fatal at construction: the sensor refuses to initialize rather than run a
/// zero-length sweep or divide by a zero scan rate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("scan rate must be positive, got {0} Hz")]
    NonPositiveScanRate(f64),

    #[error("measurements per scan must be positive")]
    NoMeasurements,

    #[error("ranges must be positive, got min {min} m, max {max} m")]
    NonPositiveRange { min: f64, max: f64 },

    #[error("range gate is inverted: min {min} m > max {max} m")]
    InvertedRangeGate { min: f64, max: f64 },

    #[error("beam intensity must be non-negative, got {0}")]
    NegativeIntensity(f64),
}

/// Static parameters of one rangefinder instance. Immutable for the
/// sensor's lifetime; validated once at construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RangefinderConfig {
    /// Lower bound of the range gate (m). Hits at or inside this distance
    /// are reported as no-return, not clamped.
    pub min_range: f64,
    /// Upper bound of the range gate and the length of every probe (m).
    pub max_range: f64,
    /// Number of evenly spaced probe directions per full sweep.
    pub measurements_per_scan: u32,
    /// Completed sweeps per second of simulation time.
    pub scan_rate_hz: f64,
    /// Constant signal strength attached to every sample.
    pub beam_intensity: f64,
}

impl Default for RangefinderConfig {
    fn default() -> Self {
        Self {
            min_range: 0.15,
            max_range: 12.0,
            measurements_per_scan: 360,
            scan_rate_hz: 5.0,
            beam_intensity: 47.0,
        }
    }
}

impl RangefinderConfig {
    /// Checks every constraint the data model imposes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan_rate_hz <= 0.0 || !self.scan_rate_hz.is_finite() {
            return Err(ConfigError::NonPositiveScanRate(self.scan_rate_hz));
        }
        if self.measurements_per_scan == 0 {
            return Err(ConfigError::NoMeasurements);
        }
        if self.min_range <= 0.0 || self.max_range <= 0.0 {
            return Err(ConfigError::NonPositiveRange {
                min: self.min_range,
                max: self.max_range,
            });
        }
        if self.min_range > self.max_range {
            return Err(ConfigError::InvertedRangeGate {
                min: self.min_range,
                max: self.max_range,
            });
        }
        if self.beam_intensity < 0.0 {
            return Err(ConfigError::NegativeIntensity(self.beam_intensity));
        }
        Ok(())
    }

    /// Nominal scan period in seconds. Only meaningful on a validated
    /// config.
    pub fn scan_period(&self) -> f64 {
        1.0 / self.scan_rate_hz
    }
}
