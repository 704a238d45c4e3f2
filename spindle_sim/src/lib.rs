// spindle_sim/src/lib.rs

//! Headless host harness for the `spindle_core` rangefinder.
//!
//! Loads a TOML scenario describing a planar world of walls and pillars
//! plus a sensor placement, then drives the sensor with a fixed-step tick
//! loop and logs every completed scan.

pub mod cli;
pub mod runner;
pub mod scenario;
pub mod sink;
pub mod world;
