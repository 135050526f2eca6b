mod cli;
mod digitize;
mod error_fmt;
mod logging;

use std::path::{Path, PathBuf};

use clap::Parser;
use digitizer_core::error::DigitizerError;

use crate::cli::{Cli, Commands, DEFAULT_CONFIG, JSON_MODE};
use crate::error_fmt::{exit_code_for_error, format_error_json, humanize};

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);
    if !cli.json {
        let _ = color_eyre::install();
    }

    if let Err(err) = real_main(cli) {
        if JSON_MODE.get().copied().unwrap_or(false) {
            eprintln!("{}", format_error_json(&err));
        } else {
            eprintln!("error: {err:#}\n\n{}", humanize(&err));
        }
        std::process::exit(exit_code_for_error(&err));
    }
}

/// Explicit `--config` must exist; otherwise `./digitizer.toml` is optional.
fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        let default = Path::new(DEFAULT_CONFIG);
        default.exists().then(|| default.to_path_buf())
    })
}

fn load_config(path: Option<&Path>) -> eyre::Result<digitizer_config::Config> {
    let Some(path) = path else {
        return Ok(digitizer_config::Config::default());
    };
    digitizer_config::load_config_file(path)
        .map_err(|e| eyre::Report::new(DigitizerError::Config(format!("{e:#}"))))
}

fn real_main(cli: Cli) -> eyre::Result<()> {
    let config_path = resolve_config_path(cli.config);
    let cfg = load_config(config_path.as_deref())?;

    match cli.cmd.unwrap_or(Commands::Run) {
        Commands::CheckConfig => {
            println!("config ok");
            Ok(())
        }
        Commands::Run => {
            logging::init_tracing(cli.json, &cli.log_level, &cfg.logging)?;
            tracing::debug!(config = ?config_path, "config loaded");
            digitize::run_digitize(
                &cfg,
                cli.image,
                cli.save_calibration.as_deref(),
                cli.json,
            )
        }
    }
}
