//! The check command: reconcile one workspace and pick the exit status

use paramlint_core::{ReconcileReport, Reconciler, TracingSink};

use crate::error::Result;
use crate::settings::Settings;

/// Exit status when `--strict` is set and file_path references are broken.
pub const EXIT_BROKEN_REFERENCES: u8 = 2;

/// Options that shape the outcome of a check, beyond what is reconciled.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    pub json: bool,
    pub strict: bool,
}

/// Reconcile `workspace`, report through `tracing` and return the exit
/// status.
pub fn run_check(
    workspace: &std::path::Path,
    settings: &Settings,
    options: CheckOptions,
) -> Result<u8> {
    let report = Reconciler::new(workspace, settings.item_types.clone())
        .with_excluded(settings.exclude.iter().cloned())
        .with_axes(settings.axes.clone())
        .run(&mut TracingSink)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(exit_status(&report, options.strict))
}

fn exit_status(report: &ReconcileReport, strict: bool) -> u8 {
    if strict && report.has_errors() {
        EXIT_BROKEN_REFERENCES
    } else {
        0
    }
}
