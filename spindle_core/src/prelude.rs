// spindle_core/src/prelude.rs

//! Convenience re-exports for hosts embedding the sensor.

pub use crate::clock::ScanClock;
pub use crate::config::{ConfigError, RangefinderConfig};
pub use crate::emitter::{ScanEmitter, ScanSink, SinkError};
pub use crate::messages::{LaserScan, RangeReturn, RangeSample, ScanCycle};
pub use crate::sampler::sweep;
pub use crate::scene::{EmptyScene, SceneQuery};
pub use crate::sensor::{BeamFeedback, Rangefinder};
pub use crate::types::{yaw_direction, Pose};
