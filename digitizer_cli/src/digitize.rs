//! The `run` command: config mapping, terminal wiring, and result reporting.

use std::path::{Path, PathBuf};

use digitizer_config::{Config, PersistedCalibration};
use digitizer_core::error::{DigitizerError, Result as CoreResult};
use digitizer_core::{CalibrationFrame, RunOutcome, RunParams, RunSummary};
use digitizer_terminal::TerminalUi;
use serde_json::json;

/// Map config sections onto runner parameters.
pub fn run_params(cfg: &Config, image: Option<PathBuf>) -> CoreResult<RunParams> {
    let calibration = cfg
        .calibration
        .as_ref()
        .map(CalibrationFrame::try_from)
        .transpose()
        .map_err(DigitizerError::from)?;
    Ok(RunParams {
        image,
        calibration,
        output: (&cfg.output).into(),
    })
}

/// Run a full interactive session on stdin/stdout.
pub fn run_digitize(
    cfg: &Config,
    image: Option<PathBuf>,
    save_calibration: Option<&Path>,
    json: bool,
) -> CoreResult<()> {
    let params = run_params(cfg, image)?;
    let mut ui = TerminalUi::stdio();
    let outcome = digitizer_core::run(&mut ui, params)?;

    match &outcome {
        RunOutcome::Cancelled => {
            if json {
                println!("{}", json!({ "status": "cancelled" }));
            } else {
                println!("No image selected; nothing to do.");
            }
        }
        RunOutcome::Completed(summary) => {
            if let Some(path) = save_calibration {
                write_calibration(&summary.calibration, path)?;
            }
            if json {
                println!("{}", summary_json(summary));
            } else {
                println!(
                    "Digitized {} curve(s) from {}.",
                    summary.curves.len(),
                    summary.image.display()
                );
            }
        }
    }
    Ok(())
}

fn write_calibration(frame: &CalibrationFrame, path: &Path) -> CoreResult<()> {
    let text = PersistedCalibration::from(frame).to_toml_string()?;
    std::fs::write(path, text)
        .map_err(|e| DigitizerError::Io(format!("write {}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), "calibration saved");
    Ok(())
}

fn summary_json(summary: &RunSummary) -> serde_json::Value {
    let curves: Vec<_> = summary
        .curves
        .iter()
        .map(|c| {
            json!({
                "points": c.points,
                "grid_points": c.grid_points,
                "raw_txt": c.paths.raw_txt.display().to_string(),
                "raw_csv": c.paths.raw_csv.display().to_string(),
                "interp_csv": c.paths.interp_csv.display().to_string(),
            })
        })
        .collect();
    json!({
        "status": "complete",
        "image": summary.image.display().to_string(),
        "x_scale": summary.calibration.x_scale(),
        "y_scale": summary.calibration.y_scale(),
        "curves": curves,
    })
}
