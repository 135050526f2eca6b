#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core digitizing logic (front-end agnostic).
//!
//! All user interaction goes through the `digitizer_traits` collaborators
//! (`ImageView`, `Pointer`, `Dialogs`), so the same session runs behind a
//! terminal, a GUI, or the scripted mock used in tests.
//!
//! ## Architecture
//!
//! - **Calibration**: origin plus one reference length per axis (`calibration`)
//! - **Capture**: ordered clicks with undo (`capture`)
//! - **Interpolation**: x as a function of y on an even grid (`interpolate`)
//! - **Output**: raw TSV/CSV and interpolated CSV, written atomically (`output`)
//! - **Session**: the per-curve state machine (`session`, `status`)
//! - **Runner**: image acquisition, calibration, session (`runner`)

pub mod calibration;
pub mod capture;
pub mod config;
pub mod conversions;
pub mod error;
pub mod interpolate;
pub mod mocks;
pub mod output;
pub mod prompt;
pub mod runner;
pub mod session;
pub mod status;
pub mod types;
pub mod ui_error;

mod atomic;

pub use calibration::{CalibrationFrame, calibrate, scale_factor};
pub use config::OutputCfg;
pub use error::{BuildError, CalibrationError, DigitizerError, InterpolationError};
pub use interpolate::{GridParams, LinearInterpolator, MAX_GRID_POINTS, interpolate};
pub use output::OutputPaths;
pub use runner::{RunParams, run};
pub use session::{Session, SessionState};
pub use status::SessionStatus;
pub use types::{CurveReport, InterpolatedCurve, RealPoint, RunOutcome, RunSummary};
