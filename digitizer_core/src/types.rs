//! Value types produced by a digitizing pass.

use std::path::PathBuf;

use crate::calibration::CalibrationFrame;
use crate::output::OutputPaths;

/// A position in real-world (chart) units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RealPoint {
    pub x: f64,
    pub y: f64,
}

impl RealPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Curve resampled on an even y grid; `x` is NaN outside the known y range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterpolatedCurve {
    pub points: Vec<RealPoint>,
}

impl InterpolatedCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grid values in order.
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }
}

/// What one digitizing pass produced.
#[derive(Debug, Clone)]
pub struct CurveReport {
    pub points: usize,
    pub grid_points: usize,
    pub paths: OutputPaths,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub image: PathBuf,
    pub calibration: CalibrationFrame,
    pub curves: Vec<CurveReport>,
}

/// Result of a whole run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// No image was selected; nothing happened.
    Cancelled,
    Completed(RunSummary),
}
