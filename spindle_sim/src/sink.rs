// spindle_sim/src/sink.rs

use log::info;
use spindle_core::emitter::{ScanSink, SinkError};
use spindle_core::messages::{LaserScan, RangeReturn};

/// Logs each completed scan as parallel range and intensity arrays, the
/// format the original console reporter used. No-returns print as `inf`.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    scans_received: u64,
}

impl ConsoleSink {
    pub fn scans_received(&self) -> u64 {
        self.scans_received
    }
}

impl ScanSink for ConsoleSink {
    fn on_scan(&mut self, scan: LaserScan) -> Result<(), SinkError> {
        self.scans_received += 1;

        let ranges = scan
            .ranges
            .iter()
            .map(|r| match r {
                RangeReturn::Hit(d) => format!("{d:.3}"),
                RangeReturn::NoReturn => "inf".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        let intensities = scan
            .intensities
            .iter()
            .map(|i| format!("{i:.1}"))
            .collect::<Vec<_>>()
            .join(" ");

        info!("[t={:.3}s] Range Array: {ranges}", scan.timestamp);
        info!("[t={:.3}s] Intensity Array: {intensities}", scan.timestamp);
        Ok(())
    }
}
