//! Strata - scheduled project backups with tiered retention.

use clap::Parser;
use std::process::ExitCode;
use strata_cli::commands;
use strata_cli::{logging, BackupConfig, Cli, CliError, Command, Formatter};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Nothing is logged to the backup log until its location is known
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(&config.log_file) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match dispatch(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> strata_cli::Result<BackupConfig> {
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| {
                CliError::Config(format!("Failed to load {}: {}", path.display(), e))
            })?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    match &cli.config {
        Some(path) => BackupConfig::from_file(path),
        None => BackupConfig::from_env(),
    }
}

fn dispatch(cli: Cli, config: &BackupConfig) -> strata_cli::Result<()> {
    let format = cli.format.map(Into::into).unwrap_or_default();
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        None | Some(Command::Run) => {
            commands::execute_run(config, &formatter)?;
        }
        Some(Command::Rotate(args)) => {
            commands::execute_rotate(args, config, &formatter)?;
        }
        Some(Command::Plan(args)) => {
            commands::execute_plan(args, config, &formatter)?;
        }
    }

    Ok(())
}
