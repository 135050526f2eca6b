use std::path::PathBuf;

use digitizer_traits::{FileFilter, Ui};
use eyre::WrapErr;

use crate::calibration::{CalibrationFrame, calibrate};
use crate::config::OutputCfg;
use crate::error::{DigitizerError, Result as CoreResult};
use crate::session::Session;
use crate::types::{RunOutcome, RunSummary};

/// Filters offered by the image open dialog.
pub const IMAGE_FILTERS: &[FileFilter] = &[
    FileFilter {
        label: "png files",
        pattern: "*.png",
    },
    FileFilter {
        label: "jpeg files",
        pattern: "*.jpg",
    },
    FileFilter {
        label: "jpeg files",
        pattern: "*.jpeg",
    },
];

/// Inputs that let a run skip interactive steps.
#[derive(Debug, Clone, Default)]
pub struct RunParams {
    /// Image to digitize; `None` asks through the open dialog.
    pub image: Option<PathBuf>,
    /// Known frame; `None` runs interactive calibration.
    pub calibration: Option<CalibrationFrame>,
    pub output: OutputCfg,
}

/// Acquire an image, calibrate, then digitize curves until the user stops.
///
/// Declining the open dialog is not an error: it yields `RunOutcome::Cancelled`.
pub fn run<U: Ui + ?Sized>(ui: &mut U, params: RunParams) -> CoreResult<RunOutcome> {
    let image = match params.image {
        Some(path) => path,
        None => match ui
            .open_file("Select image to digitize", IMAGE_FILTERS)
            .map_err(DigitizerError::from)?
        {
            Some(path) => path,
            None => {
                tracing::info!("no image selected; nothing to do");
                return Ok(RunOutcome::Cancelled);
            }
        },
    };

    ui.show_image(&image)
        .map_err(DigitizerError::from)
        .wrap_err_with(|| format!("show image {}", image.display()))?;

    let calibration = match params.calibration {
        Some(frame) => {
            tracing::info!(
                x_scale = frame.x_scale(),
                y_scale = frame.y_scale(),
                "using configured calibration"
            );
            frame
        }
        None => calibrate(ui)?,
    };

    let mut session = Session::builder(ui)
        .calibration(calibration)
        .output(params.output)
        .build()?;
    session.run_to_end()?;
    let curves = session.into_reports();
    tracing::info!(curves = curves.len(), image = %image.display(), "run complete");

    Ok(RunOutcome::Completed(RunSummary {
        image,
        calibration,
        curves,
    }))
}
