//! Conversions bridging `digitizer_config` types to `digitizer_core` types.

use digitizer_traits::PixelPoint;

use crate::calibration::CalibrationFrame;
use crate::config::OutputCfg;
use crate::error::CalibrationError;
use crate::types::RealPoint;

// ── OutputCfg ────────────────────────────────────────────────────────────────

impl From<&digitizer_config::OutputCfg> for OutputCfg {
    fn from(c: &digitizer_config::OutputCfg) -> Self {
        Self {
            precision: c.precision,
            raw_extension: c.raw_extension.clone(),
            interp_suffix: c.interp_suffix.clone(),
        }
    }
}

// ── Calibration ──────────────────────────────────────────────────────────────

impl TryFrom<&digitizer_config::PersistedCalibration> for CalibrationFrame {
    type Error = CalibrationError;

    fn try_from(c: &digitizer_config::PersistedCalibration) -> Result<Self, Self::Error> {
        CalibrationFrame::new(
            PixelPoint::new(c.origin_px, c.origin_py),
            RealPoint::new(c.origin_x, c.origin_y),
            c.x_scale,
            c.y_scale,
        )
    }
}

impl From<&CalibrationFrame> for digitizer_config::PersistedCalibration {
    fn from(f: &CalibrationFrame) -> Self {
        let (p, v) = (f.origin_pixel(), f.origin_value());
        Self {
            origin_px: p.x,
            origin_py: p.y,
            origin_x: v.x,
            origin_y: v.y,
            x_scale: f.x_scale(),
            y_scale: f.y_scale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_round_trip() {
        let frame = CalibrationFrame::new(
            PixelPoint::new(12.0, 34.0),
            RealPoint::new(1.0, 2.0),
            0.5,
            -0.25,
        )
        .unwrap();
        let persisted = digitizer_config::PersistedCalibration::from(&frame);
        let back = CalibrationFrame::try_from(&persisted).unwrap();
        assert_eq!(back, frame);
    }

    #[test]
    fn persisted_zero_scale_is_rejected() {
        let persisted = digitizer_config::PersistedCalibration {
            origin_px: 0.0,
            origin_py: 0.0,
            origin_x: 0.0,
            origin_y: 0.0,
            x_scale: 1.0,
            y_scale: 0.0,
        };
        assert!(CalibrationFrame::try_from(&persisted).is_err());
    }
}
