//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "digitizer.toml";

#[derive(Parser, Debug)]
#[command(
    name = "digitizer",
    version,
    about = "Digitize curves from a chart image into real-unit data files"
)]
pub struct Cli {
    /// Path to config TOML (defaults to ./digitizer.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Image to digitize; skips the open-file prompt
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// After a completed run, write the calibration used as a [calibration] TOML table
    #[arg(long = "save-calibration", value_name = "FILE")]
    pub save_calibration: Option<PathBuf>,

    /// Log as JSON lines and print errors as JSON objects
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Command to execute (default: run)
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Digitize curves interactively (prompts on stdout, answers on stdin)
    Run,
    /// Load and validate the config, then exit
    CheckConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_is_the_default_command() {
        let cli = Cli::parse_from(["digitizer", "--image", "chart.png"]);
        assert_eq!(cli.cmd, None);
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.image, Some(PathBuf::from("chart.png")));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["digitizer", "--log-level", "loud"]).is_err());
    }
}
