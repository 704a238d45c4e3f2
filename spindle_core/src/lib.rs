// spindle_core/src/lib.rs

//! Engine-agnostic model of a rotating rangefinder (spinning 2D LiDAR).
//!
//! The crate has no opinion about where scene geometry or rendering comes
//! from: the host injects a [`scene::SceneQuery`] capability and a
//! [`emitter::ScanSink`] for completed sweeps, then drives the sensor with
//! [`sensor::Rangefinder::tick`] once per simulation frame.

pub mod clock;
pub mod config;
pub mod emitter;
pub mod messages;
pub mod prelude;
pub mod sampler;
pub mod scene;
pub mod sensor;
pub mod types;
