//! Comparison axes and finding reports
//!
//! Each axis is a set difference `subject - reference`. What a non-empty
//! difference means, and how loudly it is reported, comes from a fixed
//! table of [`AxisConfig`] entries.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::Serialize;

use crate::{Error, ReportSink, Result, Severity};

/// The comparisons performed by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// `file_path` names missing from the project. Broken renames.
    FilePath,
    /// `item_name` names missing from the project.
    ItemName,
    /// Project artifacts the parameter file never mentions.
    Project,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::FilePath, Axis::ItemName, Axis::Project];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FilePath => "file_path",
            Self::ItemName => "item_name",
            Self::Project => "project",
        }
    }

    /// Report configuration for this axis.
    pub fn config(&self) -> Result<&'static AxisConfig> {
        AXIS_CONFIGS
            .iter()
            .find(|config| config.axis == *self)
            .ok_or_else(|| Error::InvalidAxis {
                axis: self.as_str().to_string(),
            })
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "file_path" => Ok(Self::FilePath),
            "item_name" => Ok(Self::ItemName),
            "project" => Ok(Self::Project),
            _ => Err(Error::InvalidAxis { axis: s.to_string() }),
        }
    }
}

/// Messages and severity for one axis.
#[derive(Debug)]
pub struct AxisConfig {
    pub axis: Axis,
    /// Summary emitted before the findings
    pub found_msg: &'static str,
    /// Emitted when the axis is reconciled
    pub not_found_msg: &'static str,
    pub result_start: &'static str,
    pub result_end: &'static str,
    pub severity: Severity,
}

impl AxisConfig {
    /// The message for one finding.
    pub fn finding_message(&self, name: &str) -> String {
        format!("{}{}{}", self.result_start, name, self.result_end)
    }
}

/// `file_path` mismatches block a release; the others only warn.
pub static AXIS_CONFIGS: [AxisConfig; 3] = [
    AxisConfig {
        axis: Axis::FilePath,
        found_msg: "Your parameter file contains wrong file_path entries, please fix them before deploying:",
        not_found_msg: "No invalid file_path references found in the parameter file.",
        result_start: "The file_path entry containing ",
        result_end: " was not found within the project.",
        severity: Severity::Error,
    },
    AxisConfig {
        axis: Axis::ItemName,
        found_msg: "Your parameter file contains invalid item_name references, please check them before deploying:",
        not_found_msg: "No invalid item_name references found in the parameter file.",
        result_start: "The item_name reference for ",
        result_end: " was not found within the project.",
        severity: Severity::Warning,
    },
    AxisConfig {
        axis: Axis::Project,
        found_msg: "These artifacts are not included in your parameter file:",
        not_found_msg: "There are no artifacts in the project that are not referenced in the parameter file.",
        result_start: "Artifact ",
        result_end: " is not referenced, check if it should be or configure its exclusion.",
        severity: Severity::Warning,
    },
];

/// Outcome of one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub axis: Axis,
    pub severity: Severity,
    /// Names in the subject set absent from the reference set, sorted
    pub missing: BTreeSet<String>,
}

impl Finding {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compare `subject` against `reference` and report the difference.
pub fn report_axis(
    axis: Axis,
    subject: &BTreeSet<String>,
    reference: &BTreeSet<String>,
    sink: &mut dyn ReportSink,
) -> Result<Finding> {
    let config = axis.config()?;
    let missing: BTreeSet<String> = subject.difference(reference).cloned().collect();

    if missing.is_empty() {
        sink.info(config.not_found_msg);
    } else {
        sink.log(config.severity, config.found_msg);
        for name in &missing {
            sink.log(config.severity, &config.finding_message(name));
        }
    }

    Ok(Finding {
        axis,
        severity: config.severity,
        missing,
    })
}
