//! Resampling a digitized curve on an even y grid.
//!
//! The curve's (y, x) pairs are sorted by y and x is linearly interpolated at
//! `start, start + bin, ...` up to `max(y) + 1`. Queries outside the known y
//! range are not errors: they produce `NaN` in the output row.

use crate::error::InterpolationError;
use crate::types::{InterpolatedCurve, RealPoint};

/// Hard cap on the number of grid points for one curve.
pub const MAX_GRID_POINTS: u64 = 1_000_000;

/// Slack (in bins) when deciding whether the last grid value still fits.
const GRID_EPS: f64 = 1e-9;

/// Grid start and spacing as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    pub start: f64,
    pub bin: f64,
}

impl GridParams {
    pub fn validate(&self) -> Result<(), InterpolationError> {
        if !self.start.is_finite() {
            return Err(InterpolationError::InvalidStart(self.start));
        }
        if !(self.bin.is_finite() && self.bin > 0.0) {
            return Err(InterpolationError::InvalidBin(self.bin));
        }
        Ok(())
    }

    #[inline]
    fn value(&self, k: u64) -> f64 {
        self.start + (k as f64) * self.bin
    }
}

/// Upper grid bound for a curve: `max(y) + 1`, or `None` for an empty curve.
pub fn grid_stop(curve: &[RealPoint]) -> Option<f64> {
    curve
        .iter()
        .map(|p| p.y)
        .filter(|y| !y.is_nan())
        .reduce(f64::max)
        .map(|max| max + 1.0)
}

/// Number of grid values `start + k*bin <= stop`.
pub fn grid_len(params: GridParams, stop: f64) -> Result<u64, InterpolationError> {
    params.validate()?;
    if params.start > stop {
        return Ok(0);
    }
    let steps = ((stop - params.start) / params.bin + GRID_EPS).floor();
    // `steps + 1` values; compare in f64 first so huge ratios cannot wrap.
    // The `as` cast saturates at `u64::MAX`, so the count saturates too.
    if steps + 1.0 > MAX_GRID_POINTS as f64 {
        return Err(InterpolationError::GridTooLarge {
            points: (steps as u64).saturating_add(1),
            limit: MAX_GRID_POINTS,
        });
    }
    Ok(steps as u64 + 1)
}

/// The query grid itself; first value is always `params.start` when non-empty.
pub fn grid(params: GridParams, stop: f64) -> Result<Vec<f64>, InterpolationError> {
    let n = grid_len(params, stop)?;
    Ok((0..n).map(|k| params.value(k)).collect())
}

/// Piecewise-linear lookup over knots sorted by key.
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    keys: Vec<f64>,
    values: Vec<f64>,
}

impl LinearInterpolator {
    /// Build from `(key, value)` knots in any order. Knots with a NaN key are
    /// dropped; equal keys keep their input order.
    pub fn new(knots: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut knots: Vec<(f64, f64)> = knots.into_iter().filter(|(k, _)| !k.is_nan()).collect();
        knots.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (keys, values) = knots.into_iter().unzip();
        Self { keys, values }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Inclusive key range covered by the knots.
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((*self.keys.first()?, *self.keys.last()?))
    }

    /// Interpolated value at `q`, or `None` when `q` lies outside the domain.
    pub fn try_eval(&self, q: f64) -> Option<f64> {
        if q.is_nan() {
            return None;
        }
        let n = self.keys.len();
        let hi = self.keys.partition_point(|&k| k < q);
        if hi < n && self.keys[hi] == q {
            return Some(self.values[hi]);
        }
        if hi == 0 || hi == n {
            return None;
        }
        let lo = hi - 1;
        let (k0, k1) = (self.keys[lo], self.keys[hi]);
        let (v0, v1) = (self.values[lo], self.values[hi]);
        Some(v0 + (q - k0) * (v1 - v0) / (k1 - k0))
    }

    /// Like `try_eval`, with out-of-domain queries mapped to `NaN`.
    #[inline]
    pub fn eval(&self, q: f64) -> f64 {
        self.try_eval(q).unwrap_or(f64::NAN)
    }
}

/// Resample `curve` (x as a function of y) on the grid described by `params`.
pub fn interpolate(
    curve: &[RealPoint],
    params: GridParams,
) -> Result<InterpolatedCurve, InterpolationError> {
    params.validate()?;
    let Some(stop) = grid_stop(curve) else {
        return Ok(InterpolatedCurve::default());
    };
    let ys = grid(params, stop)?;
    let lookup = LinearInterpolator::new(curve.iter().map(|p| (p.y, p.x)));

    let points: Vec<RealPoint> = ys
        .into_iter()
        .map(|y| RealPoint::new(lookup.eval(y), y))
        .collect();
    let missing = points.iter().filter(|p| p.x.is_nan()).count();
    tracing::debug!(
        grid = points.len(),
        outside_domain = missing,
        domain = ?lookup.domain(),
        start = params.start,
        bin = params.bin,
        "curve interpolated"
    );
    Ok(InterpolatedCurve { points })
}
