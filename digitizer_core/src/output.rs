//! Curve file output.
//!
//! For a chosen base path `P` (extension stripped) each pass writes:
//! - `P.txt`: raw pairs, tab-separated, no header
//! - `P.csv`: raw pairs, comma-separated, header `x,y`
//! - `P_interp.csv`: interpolated pairs, comma-separated, header `x,y`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::atomic::write_atomic;
use crate::config::OutputCfg;
use crate::error::DigitizerError;
use crate::types::{InterpolatedCurve, RealPoint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub raw_txt: PathBuf,
    pub raw_csv: PathBuf,
    pub interp_csv: PathBuf,
}

impl OutputPaths {
    /// Derive the three output paths from a user-chosen path.
    pub fn from_chosen(path: &Path, cfg: &OutputCfg) -> Self {
        let base = path.with_extension("");
        let with_tail = |tail: &str| {
            let mut s = OsString::from(base.as_os_str());
            s.push(tail);
            PathBuf::from(s)
        };
        Self {
            raw_txt: with_tail(&format!(".{}", cfg.raw_extension)),
            raw_csv: with_tail(".csv"),
            interp_csv: with_tail(&format!("{}.csv", cfg.interp_suffix)),
        }
    }
}

/// Render one value; `NaN` is always the literal `NaN`.
pub fn format_value(v: f64, precision: Option<usize>) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    match precision {
        Some(p) => format!("{v:.p$}"),
        None => v.to_string(),
    }
}

fn render(
    points: &[RealPoint],
    delimiter: u8,
    header: bool,
    precision: Option<usize>,
) -> Result<Vec<u8>, DigitizerError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    let io = |e: csv::Error| DigitizerError::Io(format!("render rows: {e}"));
    if header {
        wtr.write_record(["x", "y"]).map_err(io)?;
    }
    for p in points {
        wtr.write_record([format_value(p.x, precision), format_value(p.y, precision)])
            .map_err(io)?;
    }
    wtr.into_inner()
        .map_err(|e| DigitizerError::Io(format!("flush rows: {e}")))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), DigitizerError> {
    write_atomic(path, bytes)
        .map_err(|e| DigitizerError::Io(format!("write {}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote curve file");
    Ok(())
}

/// Write the transformed pairs as TSV (no header) and CSV (header `x,y`).
pub fn write_raw_output(
    points: &[RealPoint],
    paths: &OutputPaths,
    cfg: &OutputCfg,
) -> Result<(), DigitizerError> {
    let tsv = render(points, b'\t', false, cfg.precision)?;
    write_file(&paths.raw_txt, &tsv)?;
    let csv = render(points, b',', true, cfg.precision)?;
    write_file(&paths.raw_csv, &csv)
}

/// Write the interpolated pairs as CSV with header `x,y`.
pub fn write_interpolated_output(
    curve: &InterpolatedCurve,
    path: &Path,
    cfg: &OutputCfg,
) -> Result<(), DigitizerError> {
    let csv = render(&curve.points, b',', true, cfg.precision)?;
    write_file(path, &csv)
}
