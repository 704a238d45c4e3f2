// spindle_sim/src/runner.rs

use log::{debug, info};
use nalgebra::Point3;
use spindle_core::sensor::Rangefinder;
use spindle_core::types::Pose;

use crate::scenario::{ScenarioConfig, ScenarioError};
use crate::sink::ConsoleSink;

/// Summary of one completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub ticks: u64,
    pub scans_emitted: u64,
    pub simulated_seconds: f64,
}

/// Drives the sensor through the scenario with a fixed-step tick loop.
/// The platform is static for the whole run; only the sensor's internal
/// head spins.
pub fn run(scenario: &ScenarioConfig) -> Result<RunReport, ScenarioError> {
    scenario.validate()?;

    let pose = Pose::new(
        Point3::from(scenario.sensor.position),
        scenario.sensor.heading_deg.to_radians(),
    );
    let mut sensor = Rangefinder::new(
        scenario.sensor.rangefinder.clone(),
        Box::new(scenario.world.clone()),
        Box::new(ConsoleSink::default()),
    )?;

    let dt = 1.0 / scenario.simulation.tick_rate_hz;
    let ticks = (scenario.simulation.duration_seconds * scenario.simulation.tick_rate_hz).ceil()
        as u64;

    info!(
        "running scenario: {} obstacles, {} beams at {:.1} Hz, {} ticks of {:.4} s",
        scenario.world.obstacles.len(),
        scenario.sensor.rangefinder.measurements_per_scan,
        scenario.sensor.rangefinder.scan_rate_hz,
        ticks,
        dt
    );

    for _ in 0..ticks {
        let feedback = sensor.tick(dt, &pose);
        debug!(
            "beam: length {:.3} m at head angle {:.3} rad",
            feedback.beam_length, feedback.head_angle_rad
        );
    }

    let report = RunReport {
        ticks,
        scans_emitted: sensor.scans_emitted(),
        simulated_seconds: sensor.elapsed(),
    };
    info!(
        "simulation complete: {} ticks, {} scans in {:.2} simulated seconds",
        report.ticks, report.scans_emitted, report.simulated_seconds
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{ScenarioConfig, Simulation};
    use crate::world::{Obstacle, PlanarWorld};
    use spindle_core::config::RangefinderConfig;

    #[test]
    fn run_emits_the_expected_number_of_scans() {
        let mut config = ScenarioConfig::default();
        config.simulation = Simulation {
            duration_seconds: 2.0,
            tick_rate_hz: 64.0,
        };
        config.sensor.rangefinder = RangefinderConfig {
            measurements_per_scan: 36,
            scan_rate_hz: 4.0,
            ..Default::default()
        };
        config.world = PlanarWorld::new(vec![Obstacle::Wall {
            start: [-4.0, 5.0],
            end: [4.0, 5.0],
        }]);

        let report = run(&config).unwrap();
        assert_eq!(report.ticks, 128);
        // 4 Hz over 2 s with a 64 Hz tick: eight sweeps, exactly.
        assert_eq!(report.scans_emitted, 8);
    }

    #[test]
    fn invalid_scenario_is_rejected_before_ticking() {
        let mut config = ScenarioConfig::default();
        config.simulation.tick_rate_hz = 0.0;
        assert!(matches!(
            run(&config),
            Err(ScenarioError::InvalidSimulation(_))
        ));
    }

    #[test]
    fn zero_duration_run_completes_without_scans() {
        let mut config = ScenarioConfig::default();
        config.simulation.duration_seconds = 0.0;
        let report = run(&config).unwrap();
        assert_eq!(report.ticks, 0);
        assert_eq!(report.scans_emitted, 0);
    }
}
