// spindle_core/src/sensor.rs

use crate::clock::ScanClock;
use crate::config::{ConfigError, RangefinderConfig};
use crate::emitter::{ScanEmitter, ScanSink};
use crate::sampler;
use crate::scene::SceneQuery;
use crate::types::{yaw_direction, Pose};
use log::debug;
use std::f64::consts::TAU;

/// Per-tick feedback from the visualization path: the continuous forward
/// probe used to size and orient a feedback beam. Consumed by the host's
/// rendering/UI layer; never contributes to scan data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamFeedback {
    /// Distance of the forward probe's hit, or `None` on a miss. A display
    /// layer would render the miss case as "inf".
    pub range: Option<f64>,
    /// Length to draw the beam: the hit distance, or `max_range` on a miss.
    pub beam_length: f64,
    /// Current spin angle of the scanning head, wrapped to `[0, 2π)`.
    pub head_angle_rad: f64,
}

/// A rotating rangefinder instance.
///
/// The host drives it through [`Rangefinder::tick`] once per simulation
/// frame with that frame's duration and the platform pose. Every tick spins
/// the visual head and fires the single forward probe; when the scan clock
/// crosses the configured period, a full sweep runs synchronously within
/// that same tick and the completed cycle is published to the sink.
#[derive(Debug)]
pub struct Rangefinder {
    config: RangefinderConfig,
    clock: ScanClock,
    scene: Box<dyn SceneQuery>,
    emitter: ScanEmitter,
    head_angle_rad: f64,
    elapsed: f64,
}

impl Rangefinder {
    /// Builds a sensor from a validated configuration, an injected scene
    /// backend, and a sink for completed scans. An invalid configuration
    /// refuses to initialize.
    pub fn new(
        config: RangefinderConfig,
        scene: Box<dyn SceneQuery>,
        sink: Box<dyn ScanSink>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let clock = ScanClock::new(config.scan_rate_hz);
        Ok(Self {
            config,
            clock,
            scene,
            emitter: ScanEmitter::new(sink),
            head_angle_rad: 0.0,
            elapsed: 0.0,
        })
    }

    pub fn config(&self) -> &RangefinderConfig {
        &self.config
    }

    /// Simulation time accumulated across all ticks, in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Completed sweeps published so far.
    pub fn scans_emitted(&self) -> u64 {
        self.emitter.scans_emitted()
    }

    /// Advances the sensor by one simulation frame.
    ///
    /// Runs every frame regardless of the scan clock: the head spins one
    /// full revolution per scan period and a single ungated probe is cast
    /// along its current forward axis for the feedback beam. When the
    /// accumulated time reaches the scan period, exactly one sweep runs and
    /// its cycle is emitted before this call returns; there is no mid-sweep
    /// state observable across ticks.
    pub fn tick(&mut self, dt: f64, pose: &Pose) -> BeamFeedback {
        self.elapsed += dt;

        // Visualization path, not scan-rate-gated and with no range gating.
        self.head_angle_rad =
            (self.head_angle_rad + dt * TAU * self.config.scan_rate_hz).rem_euclid(TAU);
        let beam_direction = yaw_direction(pose.heading_rad + self.head_angle_rad);
        let range = self
            .scene
            .cast_ray(&pose.position, &beam_direction, self.config.max_range);
        let feedback = BeamFeedback {
            range,
            beam_length: range.unwrap_or(self.config.max_range),
            head_angle_rad: self.head_angle_rad,
        };

        if self.clock.advance(dt) {
            let cycle = sampler::sweep(
                self.scene.as_ref(),
                &pose.position,
                pose.heading_rad,
                &self.config,
            );
            debug!(
                "sweep complete at t={:.3}s: {} samples",
                self.elapsed,
                cycle.len()
            );
            self.emitter.emit(cycle, self.elapsed);
        }

        feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::SinkError;
    use crate::messages::{LaserScan, RangeReturn};
    use crate::scene::EmptyScene;
    use approx::assert_abs_diff_eq;
    use nalgebra::{Point3, Vector3};
    use std::sync::{Arc, Mutex};

    const EPS: f64 = 1e-9;

    #[derive(Debug, Default, Clone)]
    struct RecordingSink(Arc<Mutex<Vec<LaserScan>>>);

    impl ScanSink for RecordingSink {
        fn on_scan(&mut self, scan: LaserScan) -> Result<(), SinkError> {
            self.0.lock().unwrap().push(scan);
            Ok(())
        }
    }

    /// A wall 5 m out, spanning only directions within ~8° of +Z.
    #[derive(Debug)]
    struct WallAheadScene;

    impl SceneQuery for WallAheadScene {
        fn cast_ray(
            &self,
            _origin: &Point3<f64>,
            direction: &Vector3<f64>,
            max_distance: f64,
        ) -> Option<f64> {
            (direction.z > 0.99 && max_distance >= 5.0).then_some(5.0)
        }
    }

    fn config(scan_rate_hz: f64, measurements: u32) -> RangefinderConfig {
        RangefinderConfig {
            min_range: 0.15,
            max_range: 12.0,
            measurements_per_scan: measurements,
            scan_rate_hz,
            beam_intensity: 47.0,
        }
    }

    #[test]
    fn invalid_config_refuses_to_initialize() {
        let result = Rangefinder::new(
            config(0.0, 360),
            Box::new(EmptyScene),
            Box::<RecordingSink>::default(),
        );
        assert!(matches!(result, Err(ConfigError::NonPositiveScanRate(_))));
    }

    #[test]
    fn scan_fires_on_the_tick_that_crosses_the_period() {
        // 2 Hz -> 0.5 s period; three 0.2 s ticks cross it on the third.
        let sink = RecordingSink::default();
        let mut sensor = Rangefinder::new(
            config(2.0, 4),
            Box::new(WallAheadScene),
            Box::new(sink.clone()),
        )
        .unwrap();
        let pose = Pose::default();

        sensor.tick(0.2, &pose);
        sensor.tick(0.2, &pose);
        assert_eq!(sink.0.lock().unwrap().len(), 0);

        sensor.tick(0.2, &pose);
        let scans = sink.0.lock().unwrap();
        assert_eq!(scans.len(), 1);
        assert_eq!(sensor.scans_emitted(), 1);

        // The published payload is the four-beam sweep against the wall.
        let scan = &scans[0];
        assert_eq!(scan.ranges.len(), 4);
        assert_eq!(scan.intensities.len(), 4);
        assert_eq!(scan.ranges[0], RangeReturn::Hit(5.0));
        assert!(scan.ranges[1..]
            .iter()
            .all(|r| *r == RangeReturn::NoReturn));
        assert_abs_diff_eq!(scan.timestamp, 0.6, epsilon = EPS);
    }

    #[test]
    fn scan_rate_is_independent_of_tick_rate() {
        // 4 Hz sensor ticked at 32 Hz for two seconds: eight sweeps.
        // Binary-exact dt keeps the accumulator free of rounding drift.
        let sink = RecordingSink::default();
        let mut sensor = Rangefinder::new(
            config(4.0, 8),
            Box::new(EmptyScene),
            Box::new(sink.clone()),
        )
        .unwrap();
        let pose = Pose::default();
        for _ in 0..64 {
            sensor.tick(0.03125, &pose);
        }
        assert_eq!(sink.0.lock().unwrap().len(), 8);
    }

    #[test]
    fn beam_feedback_reports_forward_hit_and_length() {
        let mut sensor = Rangefinder::new(
            config(1.0, 4),
            Box::new(WallAheadScene),
            Box::<RecordingSink>::default(),
        )
        .unwrap();

        // Zero-duration tick leaves the head at its initial angle, so the
        // probe points along the pose heading (+Z) and hits the wall.
        let feedback = sensor.tick(0.0, &Pose::default());
        assert_eq!(feedback.range, Some(5.0));
        assert_abs_diff_eq!(feedback.beam_length, 5.0, epsilon = EPS);
    }

    #[test]
    fn beam_feedback_miss_falls_back_to_max_range() {
        let mut sensor = Rangefinder::new(
            config(1.0, 4),
            Box::new(EmptyScene),
            Box::<RecordingSink>::default(),
        )
        .unwrap();
        let feedback = sensor.tick(0.01, &Pose::default());
        assert_eq!(feedback.range, None);
        assert_abs_diff_eq!(feedback.beam_length, 12.0, epsilon = EPS);
    }

    #[test]
    fn head_spins_one_revolution_per_scan_period() {
        let mut sensor = Rangefinder::new(
            config(2.0, 4),
            Box::new(EmptyScene),
            Box::<RecordingSink>::default(),
        )
        .unwrap();
        let pose = Pose::default();

        // Quarter of the 0.5 s period -> quarter turn.
        let feedback = sensor.tick(0.125, &pose);
        assert_abs_diff_eq!(feedback.head_angle_rad, TAU / 4.0, epsilon = EPS);

        // A full period wraps back to the same angle.
        let feedback = sensor.tick(0.5, &pose);
        assert_abs_diff_eq!(feedback.head_angle_rad, TAU / 4.0, epsilon = 1e-6);
    }

    #[test]
    fn every_cycle_has_the_configured_length() {
        let sink = RecordingSink::default();
        let mut sensor = Rangefinder::new(
            config(10.0, 90),
            Box::new(WallAheadScene),
            Box::new(sink.clone()),
        )
        .unwrap();
        let pose = Pose::new(Point3::new(0.5, 0.0, -1.0), 0.7);
        for _ in 0..30 {
            sensor.tick(0.05, &pose);
        }
        let scans = sink.0.lock().unwrap();
        assert!(!scans.is_empty());
        for scan in scans.iter() {
            assert_eq!(scan.ranges.len(), 90);
            assert_eq!(scan.intensities.len(), 90);
        }
    }
}
