//! Runtime configuration for a digitizing session.
//!
//! Separate from the TOML-deserialized config in `digitizer_config`; see
//! `conversions` for the mapping.

/// How and where curve files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCfg {
    /// Fixed decimals for written values; `None` = shortest round-trip form.
    pub precision: Option<usize>,
    /// Extension of the tab-separated raw file (without the dot).
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
