// spindle_core/src/messages.rs

// =========================================================================
// == Per-Probe Data ==
// =========================================================================

/// Outcome of a single probe. `NoReturn` is a typed sentinel, distinct from
/// any numeric distance: no surface was found within the range gate, or the
/// nearest surface sat inside the dead zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeReturn {
    /// Distance to the nearest surface, in `(min_range, max_range]`.
    Hit(f64),
    NoReturn,
}

impl RangeReturn {
    pub fn is_hit(&self) -> bool {
        matches!(self, RangeReturn::Hit(_))
    }

    /// The measured distance, or `None` for a no-return.
    pub fn distance(&self) -> Option<f64> {
        match *self {
            RangeReturn::Hit(d) => Some(d),
            RangeReturn::NoReturn => None,
        }
    }
}

/// One measurement of a sweep: a gated range plus the constant beam
/// intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSample {
    pub range: RangeReturn,
    pub intensity: f64,
}

// =========================================================================
// == Per-Cycle Data ==
// =========================================================================

/// One complete 360° sweep, in sweep order: the first sample points along
/// the reference heading and successive samples step clockwise. Built fresh
/// each cycle and moved into the emitter, so no state can leak between
/// cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanCycle {
    samples: Vec<RangeSample>,
}

impl ScanCycle {
    pub fn from_samples(samples: Vec<RangeSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[RangeSample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<RangeSample> {
        self.samples
    }
}

/// The stable representation of a completed sweep handed to the output
/// sink: an ordered distance list and a parallel intensity list of equal
/// length, stamped with the simulation time of emission.
#[derive(Debug, Clone, PartialEq)]
pub struct LaserScan {
    pub timestamp: f64,
    pub ranges: Vec<RangeReturn>,
    pub intensities: Vec<f64>,
}

impl LaserScan {
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
