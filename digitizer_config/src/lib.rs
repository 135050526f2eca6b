#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema and persisted calibration for the chart digitizer.
//!
//! - `Config` and its sections are deserialized from TOML and validated.
//! - Every section is optional; an absent file is equivalent to an empty one.
//! - `PersistedCalibration` round-trips through TOML so a calibration measured
//!   once can be reused to skip the interactive origin/reference prompts.
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest fixed-decimal precision accepted for output values.
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OutputCfg {
    /// Fixed number of decimals for written values; `None` writes the
    /// shortest representation that round-trips.
    pub precision: Option<usize>,
    /// Extension of the tab-separated raw file.
    pub raw_extension: String,
    /// Appended to the base name of the interpolated CSV.
    pub interp_suffix: String,
}

impl Default for OutputCfg {
    fn default() -> Self {
        Self {
            precision: None,
            raw_extension: "txt".to_string(),
            interp_suffix: "_interp".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

/// Calibration frame as stored in TOML.
///
/// ```toml
/// [calibration]
/// origin_px = 100.0
/// origin_py = 100.0
/// origin_x = 0.0
/// origin_y = 0.0
/// x_scale = 0.1
/// y_scale = -0.1
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct PersistedCalibration {
    /// Origin click, pixel x
    pub origin_px: f64,
    /// Origin click, pixel y
    pub origin_py: f64,
    /// Real-world x at the origin click
    #[serde(default)]
    pub origin_x: f64,
    /// Real-world y at the origin click
    #[serde(default)]
    pub origin_y: f64,
    /// Real units per pixel along x
    pub x_scale: f64,
    /// Real units per pixel along y (usually negative: image rows grow downward)
    pub y_scale: f64,
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputCfg,
    #[serde(default)]
    pub logging: Logging,
    /// Optional persisted calibration; preferred over interactive calibration when present.
    #[serde(default)]
    pub calibration: Option<PersistedCalibration>,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read, parse and validate a config file.
pub fn load_config_file(path: &Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read config {:?}: {}", path, e))?;
    let cfg = load_toml(&text).map_err(|e| eyre::eyre!("invalid configuration {:?}: {}", path, e))?;
    cfg.validate()?;
    Ok(cfg)
}

#[derive(Serialize)]
struct CalibrationFile<'a> {
    calibration: &'a PersistedCalibration,
}

impl PersistedCalibration {
    /// Render as a standalone `[calibration]` table that `load_toml` accepts.
    pub fn to_toml_string(&self) -> eyre::Result<String> {
        toml::to_string(&CalibrationFile { calibration: self })
            .map_err(|e| eyre::eyre!("serialize calibration: {}", e))
    }

    pub fn validate(&self) -> eyre::Result<()> {
        let origin = [self.origin_px, self.origin_py, self.origin_x, self.origin_y];
        if origin.iter().any(|v| !v.is_finite()) {
            eyre::bail!("calibration origin values must be finite");
        }
        for (name, v) in [("x_scale", self.x_scale), ("y_scale", self.y_scale)] {
            if !v.is_finite() {
                eyre::bail!("calibration.{name} must be finite");
            }
            if v == 0.0 {
                eyre::bail!("calibration.{name} must be non-zero");
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Output
        if let Some(p) = self.output.precision
            && p > MAX_PRECISION
        {
            eyre::bail!("output.precision must be <= {MAX_PRECISION}");
        }
        let ext = &self.output.raw_extension;
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            eyre::bail!("output.raw_extension must be non-empty and alphanumeric");
        }
        if ext.eq_ignore_ascii_case("csv") {
            eyre::bail!("output.raw_extension must not be 'csv' (collides with the raw CSV)");
        }
        let suffix = &self.output.interp_suffix;
        if suffix.is_empty() {
            eyre::bail!("output.interp_suffix must be non-empty");
        }
        if suffix.contains('/') || suffix.contains('\\') {
            eyre::bail!("output.interp_suffix must not contain path separators");
        }

        // Logging
        if let Some(rot) = self.logging.rotation.as_deref()
            && !matches!(rot, "never" | "daily" | "hourly")
        {
            eyre::bail!("logging.rotation must be one of never|daily|hourly");
        }
        if let Some(level) = self.logging.level.as_deref()
            && !matches!(
                level.to_ascii_lowercase().as_str(),
                "error" | "warn" | "info" | "debug" | "trace"
            )
        {
            eyre::bail!("logging.level must be one of error|warn|info|debug|trace");
        }

        // Calibration
        if let Some(cal) = &self.calibration {
            cal.validate()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let cfg = load_toml("").unwrap();
        assert_eq!(cfg.output.raw_extension, "txt");
        assert_eq!(cfg.output.interp_suffix, "_interp");
        assert!(cfg.output.precision.is_none());
        assert!(cfg.calibration.is_none());
        cfg.validate().unwrap();
    }

    #[test]
    fn calibration_round_trips_through_toml() {
        let cal = PersistedCalibration {
            origin_px: 100.0,
            origin_py: 250.5,
            origin_x: 1.0,
            origin_y: -2.0,
            x_scale: 0.1,
            y_scale: -0.25,
        };
        let text = cal.to_toml_string().unwrap();
        assert!(text.contains("[calibration]"));
        let back = load_toml(&text).unwrap().calibration.unwrap();
        assert_eq!(back, cal);
    }
}
