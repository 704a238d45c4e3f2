// spindle_core/src/sampler.rs

use crate::config::RangefinderConfig;
use crate::messages::{RangeReturn, RangeSample, ScanCycle};
use crate::scene::SceneQuery;
use crate::types::yaw_direction;
use nalgebra::Point3;
use std::f64::consts::TAU;

/// Runs one full sweep: `measurements_per_scan` probes, evenly spaced over
/// the circle, starting at `reference_heading_rad` and stepping clockwise
/// by `2π / measurements_per_scan` per probe.
///
/// Gating per probe:
/// - a hit at distance `d > min_range` becomes `Hit(d)`;
/// - a miss, or a hit at `d <= min_range`, becomes `NoReturn`. A surface
///   inside the dead zone is invisible to the sensor, not clamped to the
///   gate boundary.
///
/// The whole sweep executes synchronously; a probe that fails resolves to
/// `NoReturn` for that ray only, with no retry.
pub fn sweep(
    scene: &dyn SceneQuery,
    origin: &Point3<f64>,
    reference_heading_rad: f64,
    config: &RangefinderConfig,
) -> ScanCycle {
    let step = TAU / f64::from(config.measurements_per_scan);
    let mut samples = Vec::with_capacity(config.measurements_per_scan as usize);

    let mut angle = reference_heading_rad;
    for _ in 0..config.measurements_per_scan {
        let direction = yaw_direction(angle);
        let range = match scene.cast_ray(origin, &direction, config.max_range) {
            Some(d) if d > config.min_range => RangeReturn::Hit(d),
            _ => RangeReturn::NoReturn,
        };
        samples.push(RangeSample {
            range,
            intensity: config.beam_intensity,
        });
        angle -= step;
    }

    ScanCycle::from_samples(samples)
}
