//! Retry-until-valid prompt loops.
//!
//! Each loop re-asks indefinitely; the only way out besides a valid answer is
//! a collaborator failure (e.g. closed input), which propagates.

use std::path::PathBuf;

use digitizer_traits::Dialogs;

use crate::error::DigitizerError;
use crate::interpolate::{self, GridParams};
use crate::types::RealPoint;

pub const ERROR_TITLE: &str = "Error";

/// Ask for one finite float, showing `invalid_msg` after each bad answer.
pub fn ask_float_until_valid<D: Dialogs + ?Sized>(
    ui: &mut D,
    title: &str,
    prompt: &str,
    invalid_msg: &str,
) -> Result<f64, DigitizerError> {
    loop {
        match ui.ask_float(title, prompt)? {
            Some(v) if v.is_finite() => return Ok(v),
            other => {
                tracing::debug!(answer = ?other, title, "invalid numeric entry");
                ui.error(ERROR_TITLE, invalid_msg)?;
            }
        }
    }
}

/// Ask for two floats; both are asked again if either is invalid.
pub fn ask_float_pair_until_valid<D: Dialogs + ?Sized>(
    ui: &mut D,
    title: &str,
    prompts: (&str, &str),
    invalid_msg: &str,
) -> Result<(f64, f64), DigitizerError> {
    loop {
        let a = ui.ask_float(title, prompts.0)?;
        let b = ui.ask_float(title, prompts.1)?;
        match (a, b) {
            (Some(a), Some(b)) if a.is_finite() && b.is_finite() => return Ok((a, b)),
            other => {
                tracing::debug!(answer = ?other, title, "invalid numeric pair");
                ui.error(ERROR_TITLE, invalid_msg)?;
            }
        }
    }
}

/// Ask for a destination path until a non-empty one is chosen.
pub fn ask_save_path<D: Dialogs + ?Sized>(
    ui: &mut D,
    default_extension: &str,
) -> Result<PathBuf, DigitizerError> {
    loop {
        match ui.save_file("Select file to save the data", default_extension)? {
            Some(path) if !path.as_os_str().is_empty() => return Ok(path),
            _ => ui.info(
                "Filename error",
                "Please select a filename to save the data.",
            )?,
        }
    }
}

/// Ask for the interpolation grid start and bin until they describe a usable grid.
pub fn ask_interpolation<D: Dialogs + ?Sized>(
    ui: &mut D,
    curve: &[RealPoint],
) -> Result<GridParams, DigitizerError> {
    let stop = interpolate::grid_stop(curve);
    loop {
        let (start, bin) = ask_float_pair_until_valid(
            ui,
            "Interpolation",
            ("Initial y value for interpolation", "Interpolation bin"),
            "Please provide valid numbers for the interpolation start and bin.",
        )?;
        let params = GridParams { start, bin };
        let check = match stop {
            Some(stop) => interpolate::grid_len(params, stop).map(|_| ()),
            None => params.validate(),
        };
        match check {
            Ok(()) => return Ok(params),
            Err(e) => {
                tracing::debug!(error = %e, "interpolation parameters rejected");
                ui.error(ERROR_TITLE, &e.to_string())?;
            }
        }
    }
}

/// Yes/no: digitize another curve?
pub fn ask_continue<D: Dialogs + ?Sized>(ui: &mut D) -> Result<bool, DigitizerError> {
    Ok(ui.ask_yes_no("Finished?", "Digitize another curve?")?)
}
