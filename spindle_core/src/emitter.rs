// spindle_core/src/emitter.rs

use crate::messages::{LaserScan, ScanCycle};
use log::warn;
use std::fmt::Debug;
use thiserror::Error;

/// Raised by a sink that cannot accept a completed scan. The emitter logs
/// it and moves on; scans are never retried or buffered for redelivery.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SinkError {
    #[error("scan sink unavailable: {0}")]
    Unavailable(String),
}

/// Receiver for completed sweeps, registered by the host at sensor
/// construction. Invoked once per completed cycle with the full payload;
/// a partially filled cycle is never observable.
pub trait ScanSink: Debug + Send {
    fn on_scan(&mut self, scan: LaserScan) -> Result<(), SinkError>;
}

/// Packages each completed [`ScanCycle`] into a [`LaserScan`] and hands it
/// to the sink. The cycle is consumed by value, so the next sweep starts
/// from a fresh buffer and nothing can leak between cycles.
#[derive(Debug)]
pub struct ScanEmitter {
    sink: Box<dyn ScanSink>,
    scans_emitted: u64,
}

impl ScanEmitter {
    pub fn new(sink: Box<dyn ScanSink>) -> Self {
        Self {
            sink,
            scans_emitted: 0,
        }
    }

    /// Publishes one cycle. A sink failure drops the scan and keeps the
    /// sensor scanning.
    pub fn emit(&mut self, cycle: ScanCycle, timestamp: f64) {
        let samples = cycle.into_samples();
        let mut ranges = Vec::with_capacity(samples.len());
        let mut intensities = Vec::with_capacity(samples.len());
        for sample in samples {
            ranges.push(sample.range);
            intensities.push(sample.intensity);
        }

        let scan = LaserScan {
            timestamp,
            ranges,
            intensities,
        };

        self.scans_emitted += 1;
        if let Err(e) = self.sink.on_scan(scan) {
            warn!("dropping completed scan at t={timestamp:.3}s: {e}");
        }
    }

    /// Number of completed cycles handed to the sink, delivered or not.
    pub fn scans_emitted(&self) -> u64 {
        self.scans_emitted
    }
}
