//! Console and results-file logging
//!
//! Both layers receive the same events. The console layer is colored and
//! filtered by `RUST_LOG` (or `--verbose`); the results file is plain text
//! at INFO and above.

use std::fs::File;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub verbose: bool,
    /// Results file, truncated on open. `None` disables it.
    pub results_file: Option<PathBuf>,
    /// Send console output to stderr, keeping stdout free for JSON.
    pub console_to_stderr: bool,
}

/// Install the global subscriber.
pub fn init(options: &LogOptions) -> Result<()> {
    let default_level = if options.verbose { "debug" } else { "info" };
    let console_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })?;

    let console_timer = ChronoLocal::new("%H:%M:%S".to_string());
    let console_layer = if options.console_to_stderr {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_timer(console_timer)
            .with_target(false)
            .with_filter(console_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(std::io::stdout().is_terminal())
            .with_timer(console_timer)
            .with_target(false)
            .with_filter(console_filter)
            .boxed()
    };

    let file_layer = match &options.results_file {
        Some(path) => Some(results_file_layer(path)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })
}

fn results_file_layer<S>(path: &Path) -> Result<Box<dyn Layer<S> + Send + Sync>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let file = File::create(path).map_err(|e| CliError::Logging {
        message: format!("cannot create '{}': {e}", path.display()),
    })?;

    Ok(fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_filter(LevelFilter::INFO)
        .boxed())
}
