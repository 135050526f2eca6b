//! The curve digitizing loop as an explicit state machine.
//!
//! ```text
//! AwaitingCurve -> CapturingPoints -> Transforming -> AwaitingSaveName
//!   -> WritingOutput -> AwaitingInterpolationParams -> Interpolating
//!   -> WritingInterpolatedOutput -> AwaitingContinue -> AwaitingCurve | Finished
//! ```
//!
//! Each `step` performs one state's action. Any error is fatal: the session
//! is left in `Finished` and the error propagates.

use digitizer_traits::{PixelPoint, Ui};

use crate::calibration::CalibrationFrame;
use crate::capture::capture_points;
use crate::config::OutputCfg;
use crate::error::{BuildError, DigitizerError, Result};
use crate::interpolate::{GridParams, interpolate};
use crate::output::{OutputPaths, write_interpolated_output, write_raw_output};
use crate::prompt;
use crate::status::SessionStatus;
use crate::types::{CurveReport, InterpolatedCurve, RealPoint};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    AwaitingCurve,
    CapturingPoints,
    Transforming {
        pixels: Vec<PixelPoint>,
    },
    AwaitingSaveName {
        points: Vec<RealPoint>,
    },
    WritingOutput {
        points: Vec<RealPoint>,
        paths: OutputPaths,
    },
    AwaitingInterpolationParams {
        points: Vec<RealPoint>,
        paths: OutputPaths,
    },
    Interpolating {
        points: Vec<RealPoint>,
        paths: OutputPaths,
        params: GridParams,
    },
    WritingInterpolatedOutput {
        points: usize,
        paths: OutputPaths,
        curve: InterpolatedCurve,
    },
    AwaitingContinue,
    Finished,
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AwaitingCurve => "awaiting_curve",
            Self::CapturingPoints => "capturing_points",
            Self::Transforming { .. } => "transforming",
            Self::AwaitingSaveName { .. } => "awaiting_save_name",
            Self::WritingOutput { .. } => "writing_output",
            Self::AwaitingInterpolationParams { .. } => "awaiting_interpolation_params",
            Self::Interpolating { .. } => "interpolating",
            Self::WritingInterpolatedOutput { .. } => "writing_interpolated_output",
            Self::AwaitingContinue => "awaiting_continue",
            Self::Finished => "finished",
        }
    }
}

pub struct SessionBuilder<'a, U: ?Sized> {
    ui: &'a mut U,
    calibration: Option<CalibrationFrame>,
    output: OutputCfg,
}

impl<'a, U: Ui + ?Sized> SessionBuilder<'a, U> {
    pub fn calibration(mut self, frame: CalibrationFrame) -> Self {
        self.calibration = Some(frame);
        self
    }

    pub fn output(mut self, cfg: OutputCfg) -> Self {
        self.output = cfg;
        self
    }

    pub fn build(self) -> Result<Session<'a, U>> {
        let frame = self
            .calibration
            .ok_or_else(|| eyre::Report::new(BuildError::MissingCalibration))?;
        if self.output.raw_extension.is_empty() {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "raw_extension must not be empty",
            )));
        }
        if self.output.raw_extension.eq_ignore_ascii_case("csv") {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "raw_extension collides with the raw CSV",
            )));
        }
        if self.output.interp_suffix.is_empty() {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "interp_suffix must not be empty",
            )));
        }
        Ok(Session {
            ui: self.ui,
            frame,
            output: self.output,
            state: SessionState::AwaitingCurve,
            reports: Vec::new(),
        })
    }
}

/// One digitizing session over an already calibrated image.
pub struct Session<'a, U: ?Sized> {
    ui: &'a mut U,
    frame: CalibrationFrame,
    output: OutputCfg,
    state: SessionState,
    reports: Vec<CurveReport>,
}

impl<'a, U: Ui + ?Sized> Session<'a, U> {
    pub fn builder(ui: &'a mut U) -> SessionBuilder<'a, U> {
        SessionBuilder {
            ui,
            calibration: None,
            output: OutputCfg::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// Curves completed so far.
    pub fn reports(&self) -> &[CurveReport] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<CurveReport> {
        self.reports
    }

    /// Perform exactly one state's action.
    pub fn step(&mut self) -> Result<SessionStatus> {
        let state = std::mem::replace(&mut self.state, SessionState::Finished);
        if matches!(state, SessionState::Finished) {
            return Ok(SessionStatus::Finished);
        }
        let from = state.name();
        let next = self.advance(state)?;
        tracing::debug!(from, to = next.name(), "session transition");
        let status = if matches!(next, SessionState::Finished) {
            SessionStatus::Finished
        } else {
            SessionStatus::Running
        };
        self.state = next;
        Ok(status)
    }

    /// Step until `Finished`, returning the completed curve reports.
    pub fn run_to_end(&mut self) -> Result<&[CurveReport]> {
        while self.step()? == SessionStatus::Running {}
        Ok(&self.reports)
    }

    fn advance(&mut self, state: SessionState) -> std::result::Result<SessionState, DigitizerError> {
        use SessionState::*;
        Ok(match state {
            AwaitingCurve => {
                self.ui.info(
                    "Digitize curve",
                    "Please digitize the curve. Add points in order; undo removes the last point; finish when done.",
                )?;
                CapturingPoints
            }
            CapturingPoints => {
                let pixels = capture_points(&mut *self.ui, None)?;
                self.ui.draw_curve(&pixels)?;
                Transforming { pixels }
            }
            Transforming { pixels } => AwaitingSaveName {
                points: self.frame.transform(&pixels),
            },
            AwaitingSaveName { points } => {
                let chosen = prompt::ask_save_path(&mut *self.ui, &self.output.raw_extension)?;
                let paths = OutputPaths::from_chosen(&chosen, &self.output);
                WritingOutput { points, paths }
            }
            WritingOutput { points, paths } => {
                write_raw_output(&points, &paths, &self.output)?;
                AwaitingInterpolationParams { points, paths }
            }
            AwaitingInterpolationParams { points, paths } => {
                let params = prompt::ask_interpolation(&mut *self.ui, &points)?;
                Interpolating {
                    points,
                    paths,
                    params,
                }
            }
            Interpolating {
                points,
                paths,
                params,
            } => {
                let curve = interpolate(&points, params)?;
                WritingInterpolatedOutput {
                    points: points.len(),
                    paths,
                    curve,
                }
            }
            WritingInterpolatedOutput {
                points,
                paths,
                curve,
            } => {
                write_interpolated_output(&curve, &paths.interp_csv, &self.output)?;
                tracing::info!(
                    points,
                    grid_points = curve.len(),
                    base = %paths.raw_txt.display(),
                    "curve digitized"
                );
                self.reports.push(CurveReport {
                    points,
                    grid_points: curve.len(),
                    paths,
                });
                AwaitingContinue
            }
            AwaitingContinue => {
                if prompt::ask_continue(&mut *self.ui)? {
                    AwaitingCurve
                } else {
                    self.ui.clear()?;
                    Finished
                }
            }
            Finished => Finished,
        })
    }
}
