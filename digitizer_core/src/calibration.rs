//! Pixel → real-unit calibration.
//!
//! A `CalibrationFrame` is an axis-aligned affine map:
//!
//! ```text
//! x' = (px - origin_pixel.x) * x_scale + origin_value.x
//! y' = (py - origin_pixel.y) * y_scale + origin_value.y
//! ```
//!
//! It is measured interactively once per session (origin click plus one
//! reference length per axis) and is immutable afterward.

use digitizer_traits::{Axis, PixelPoint, Ui};

use crate::capture::capture_points;
use crate::error::{CalibrationError, DigitizerError};
use crate::prompt::{self, ERROR_TITLE};
use crate::types::RealPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationFrame {
    origin_pixel: PixelPoint,
    origin_value: RealPoint,
    x_scale: f64,
    y_scale: f64,
}

impl CalibrationFrame {
    /// Build a frame; scales must be finite and non-zero, origins finite.
    pub fn new(
        origin_pixel: PixelPoint,
        origin_value: RealPoint,
        x_scale: f64,
        y_scale: f64,
    ) -> Result<Self, CalibrationError> {
        if !origin_pixel.is_finite() {
            return Err(CalibrationError::NonFinite {
                what: "origin pixel",
            });
        }
        if !(origin_value.x.is_finite() && origin_value.y.is_finite()) {
            return Err(CalibrationError::NonFinite {
                what: "origin value",
            });
        }
        check_scale(x_scale, Axis::X)?;
        check_scale(y_scale, Axis::Y)?;
        Ok(Self {
            origin_pixel,
            origin_value,
            x_scale,
            y_scale,
        })
    }

    pub fn origin_pixel(&self) -> PixelPoint {
        self.origin_pixel
    }

    pub fn origin_value(&self) -> RealPoint {
        self.origin_value
    }

    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    /// Pixel → real units.
    #[inline]
    pub fn to_real(&self, p: PixelPoint) -> RealPoint {
        RealPoint {
            x: (p.x - self.origin_pixel.x) * self.x_scale + self.origin_value.x,
            y: (p.y - self.origin_pixel.y) * self.y_scale + self.origin_value.y,
        }
    }

    /// Real units → pixel; inverse of `to_real`.
    #[inline]
    pub fn to_pixel(&self, r: RealPoint) -> PixelPoint {
        PixelPoint {
            x: (r.x - self.origin_value.x) / self.x_scale + self.origin_pixel.x,
            y: (r.y - self.origin_value.y) / self.y_scale + self.origin_pixel.y,
        }
    }

    /// Elementwise `to_real`, preserving order.
    pub fn transform(&self, points: &[PixelPoint]) -> Vec<RealPoint> {
        points.iter().map(|p| self.to_real(*p)).collect()
    }
}

fn check_scale(scale: f64, axis: Axis) -> Result<(), CalibrationError> {
    if !scale.is_finite() {
        return Err(CalibrationError::NonFinite {
            what: match axis {
                Axis::X => "x scale",
                Axis::Y => "y scale",
            },
        });
    }
    if scale == 0.0 {
        return Err(CalibrationError::ZeroLength { axis });
    }
    Ok(())
}

/// Real units per pixel along `axis`, from two reference clicks spanning
/// `real_length` units.
///
/// Zero pixel distance and zero length are rejected; the sign follows
/// `(p2 - p1) * real_length`.
pub fn scale_factor(
    p1: PixelPoint,
    p2: PixelPoint,
    axis: Axis,
    real_length: f64,
) -> Result<f64, CalibrationError> {
    if !real_length.is_finite() {
        return Err(CalibrationError::NonFinite {
            what: "reference length",
        });
    }
    let delta = p2.along(axis) - p1.along(axis);
    if !delta.is_finite() {
        return Err(CalibrationError::NonFinite {
            what: "pixel delta",
        });
    }
    if delta == 0.0 {
        return Err(CalibrationError::ZeroPixelDelta { axis });
    }
    if real_length == 0.0 {
        return Err(CalibrationError::ZeroLength { axis });
    }
    let factor = real_length / delta;
    if !factor.is_finite() || factor == 0.0 {
        return Err(CalibrationError::NonFinite {
            what: "scale factor",
        });
    }
    Ok(factor)
}

/// Interactively pick the origin: one click, then its real coordinates.
///
/// Repeats until the user confirms the selection.
pub fn select_origin<U: Ui + ?Sized>(ui: &mut U) -> Result<(PixelPoint, f64, f64), DigitizerError> {
    loop {
        ui.info(
            "Select origin",
            "Select the point whose real-world coordinates you know (usually the axes origin).",
        )?;
        let clicks = capture_points(ui, Some(1))?;
        let Some(&origin) = clicks.first() else {
            ui.error(ERROR_TITLE, "No point was selected for the origin.")?;
            continue;
        };

        let (x, y) = prompt::ask_float_pair_until_valid(
            ui,
            "Enter reference origin",
            ("Real-world x value at the origin", "Real-world y value at the origin"),
            "Please provide valid numbers for the origin.",
        )?;

        let confirmed = ui.ask_yes_no(
            "Origin confirmation",
            &format!("You selected {origin} as the origin ({x}, {y}). Is this correct?"),
        )?;
        if confirmed {
            tracing::info!(px = origin.x, py = origin.y, x, y, "origin selected");
            return Ok((origin, x, y));
        }
        tracing::debug!("origin rejected; retrying");
    }
}

/// Interactively measure a known length along `axis` and return the scale factor.
///
/// Repeats until the user confirms; zero pixel distance or zero length
/// restarts the step with an error message.
pub fn select_reference_length<U: Ui + ?Sized>(ui: &mut U, axis: Axis) -> Result<f64, DigitizerError> {
    loop {
        ui.info(
            "Select reference length",
            &format!(
                "Select two points a known distance apart in the {axis} direction: the start, then the end."
            ),
        )?;
        let clicks = capture_points(ui, Some(2))?;
        let &[p1, p2] = clicks.as_slice() else {
            ui.error(
                ERROR_TITLE,
                &format!("Two points are needed for the {axis} reference length."),
            )?;
            continue;
        };

        let length = prompt::ask_float_until_valid(
            ui,
            "Enter reference length",
            &format!("Reference length in the {axis} direction"),
            "Please provide a valid length.",
        )?;

        let factor = match scale_factor(p1, p2, axis, length) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(error = %e, %axis, "reference length rejected");
                ui.error(ERROR_TITLE, &format!("{e}. Please select the reference again."))?;
                continue;
            }
        };

        let delta = p2.along(axis) - p1.along(axis);
        let confirmed = ui.ask_yes_no(
            "Length confirmation",
            &format!(
                "You selected {delta:4.0} pixels in {axis} direction corresponding to {length:4.4} units. Is this correct?"
            ),
        )?;
        if confirmed {
            tracing::info!(%axis, pixels = delta, length, factor, "reference length selected");
            return Ok(factor);
        }
        tracing::debug!(%axis, "reference length rejected by user; retrying");
    }
}

/// Full interactive calibration: origin, then x and y reference lengths.
pub fn calibrate<U: Ui + ?Sized>(ui: &mut U) -> Result<CalibrationFrame, DigitizerError> {
    let (origin, x, y) = select_origin(ui)?;
    let x_scale = select_reference_length(ui, Axis::X)?;
    let y_scale = select_reference_length(ui, Axis::Y)?;
    let frame = CalibrationFrame::new(origin, RealPoint::new(x, y), x_scale, y_scale)?;
    tracing::info!(x_scale, y_scale, "calibration complete");
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> CalibrationFrame {
        CalibrationFrame::new(
            PixelPoint::new(100.0, 100.0),
            RealPoint::new(0.0, 0.0),
            0.1,
            -0.1,
        )
        .unwrap()
    }

    #[test]
    fn origin_maps_to_origin_value() {
        let f = frame();
        assert_eq!(f.to_real(PixelPoint::new(100.0, 100.0)), RealPoint::new(0.0, 0.0));
    }

    #[test]
    fn transform_keeps_click_order() {
        let f = frame();
        let pts = [PixelPoint::new(150.0, 100.0), PixelPoint::new(100.0, 50.0)];
        let out = f.transform(&pts);
        assert_eq!(out.len(), 2);
        assert!((out[0].x - 5.0).abs() < 1e-12 && out[0].y.abs() < 1e-12);
        assert!(out[1].x.abs() < 1e-12 && (out[1].y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn scale_factor_rejects_zero_delta() {
        let p = PixelPoint::new(10.0, 10.0);
        let err = scale_factor(p, PixelPoint::new(10.0, 99.0), Axis::X, 5.0).unwrap_err();
        assert_eq!(err, CalibrationError::ZeroPixelDelta { axis: Axis::X });
    }

    #[test]
    fn new_rejects_zero_and_non_finite_scales() {
        let o = PixelPoint::new(0.0, 0.0);
        let v = RealPoint::default();
        assert!(matches!(
            CalibrationFrame::new(o, v, 0.0, 1.0),
            Err(CalibrationError::ZeroLength { axis: Axis::X })
        ));
        assert!(matches!(
            CalibrationFrame::new(o, v, 1.0, f64::NAN),
            Err(CalibrationError::NonFinite { .. })
        ));
    }
}
