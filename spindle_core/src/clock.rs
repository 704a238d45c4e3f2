// spindle_core/src/clock.rs

/// Decides when a new scan cycle is due, independent of the rate at which
/// the host advances simulation time.
///
/// The check is level-based: elapsed time accumulates across ticks and a
/// sweep triggers on the first tick where the total reaches the scan
/// period. The effective period is therefore `1/scan_rate_hz` rounded up to
/// the next tick boundary; hosts wanting exact timing must keep their tick
/// duration small relative to the period.
#[derive(Debug, Clone)]
pub struct ScanClock {
    period: f64,
    accumulated: f64,
}

impl ScanClock {
    /// `scan_rate_hz` must already have passed config validation.
    pub fn new(scan_rate_hz: f64) -> Self {
        assert!(
            scan_rate_hz > 0.0,
            "ScanClock::new: scan rate must be positive"
        );
        Self {
            period: 1.0 / scan_rate_hz,
            accumulated: 0.0,
        }
    }

    /// Adds `dt` to the accumulator. Returns `true` exactly when the
    /// accumulated time has reached the scan period, in which case the
    /// accumulator resets to zero as a side effect. At most one trigger per
    /// call: an oversized `dt` spanning several periods still yields a
    /// single sweep, matching the accumulate-then-compare original.
    pub fn advance(&mut self, dt: f64) -> bool {
        assert!(dt >= 0.0, "ScanClock::advance: dt cannot be negative");
        self.accumulated += dt;
        if self.accumulated >= self.period {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Time accumulated since the last trigger (or construction).
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }
}
