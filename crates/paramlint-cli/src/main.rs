//! paramlint CLI
//!
//! Checks a workspace's `parameter.yml` against its artifact directories.

mod check;
mod cli;
mod error;
mod logging;
mod settings;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use check::CheckOptions;
use cli::Cli;
use error::Result;
use logging::LogOptions;
use settings::{Settings, SettingsFile};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init(&LogOptions {
        verbose: cli.verbose,
        results_file: (!cli.no_log_file).then(|| cli.log_file.clone()),
        console_to_stderr: cli.json,
    })?;
    tracing::debug!("Verbose mode enabled");

    let file = SettingsFile::discover(&cli.path, cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, file)?;

    let status = check::run_check(
        &cli.path,
        &settings,
        CheckOptions {
            json: cli.json,
            strict: cli.strict,
        },
    )?;
    Ok(ExitCode::from(status))
}
