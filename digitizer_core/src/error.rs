use digitizer_traits::Axis;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum DigitizerError {
    #[error("ui error: {0}")]
    Ui(String),
    #[error("input closed before the session finished")]
    InputClosed,
    #[error("image error: {0}")]
    Image(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("calibration error: {0}")]
    Calibration(#[from] CalibrationError),
    #[error("interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}

/// Rejections while building a calibration frame.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CalibrationError {
    #[error("reference points have zero pixel distance along {axis}")]
    ZeroPixelDelta { axis: Axis },
    #[error("reference length along {axis} must be non-zero")]
    ZeroLength { axis: Axis },
    #[error("non-finite {what}")]
    NonFinite { what: &'static str },
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InterpolationError {
    #[error("interpolation bin must be finite and > 0, got {0}")]
    InvalidBin(f64),
    #[error("interpolation start must be finite, got {0}")]
    InvalidStart(f64),
    #[error("interpolation grid would have {points} points (limit {limit})")]
    GridTooLarge { points: u64, limit: u64 },
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("missing calibration")]
    MissingCalibration,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
