//! The reconciliation run
//!
//! ```text
//! parameter.yml --load--> entries --+--> file_path names --+
//!                                   +--> item_name names --+--> axes --> sink
//! workspace tree --scan--> artifact directories --strip----+
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::document::{PARAMETER_FILE, ParameterDocument};
use crate::extract::{file_path_names, item_names, replacement_entries};
use crate::project::{project_artifacts, resolve_exclusions};
use crate::report::{Axis, Finding, report_axis};
use crate::{Error, ItemTypes, PathNameMatcher, ReportSink, Result, Severity};

/// One reconciliation of a workspace against its parameter file.
#[derive(Debug, Clone)]
pub struct Reconciler {
    workspace: PathBuf,
    item_types: ItemTypes,
    excluded: BTreeSet<String>,
    axes: Vec<Axis>,
}

/// Everything a run computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub parameter_file: String,
    pub item_types: Vec<String>,
    pub project_artifacts: BTreeSet<String>,
    pub file_path_names: BTreeSet<String>,
    pub item_names: BTreeSet<String>,
    pub findings: Vec<Finding>,
}

impl ReconcileReport {
    pub fn finding(&self, axis: Axis) -> Option<&Finding> {
        self.findings.iter().find(|f| f.axis == axis)
    }

    /// Whether any axis produced findings at error severity or above.
    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity >= Severity::Error && !f.is_clean())
    }
}

impl Reconciler {
    /// Reconcile `workspace` for the given item types, checking every axis.
    pub fn new(workspace: impl Into<PathBuf>, item_types: ItemTypes) -> Self {
        Self {
            workspace: workspace.into(),
            item_types,
            excluded: BTreeSet::new(),
            axes: Axis::ALL.to_vec(),
        }
    }

    /// Workspace-relative paths whose subtrees are not scanned.
    ///
    /// Duplicates collapse into one exclusion and the list is narrated in
    /// sorted order, not in the order given.
    pub fn with_excluded<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = excluded.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the run to `axes`, reported in the given order.
    pub fn with_axes(mut self, axes: Vec<Axis>) -> Self {
        self.axes = axes;
        self
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Run the full comparison.
    ///
    /// Fatal errors are reported to `sink` at error severity and returned.
    pub fn run(&self, sink: &mut dyn ReportSink) -> Result<ReconcileReport> {
        let result = self.reconcile(sink);
        if let Err(e) = &result {
            sink.error(&e.to_string());
        }
        result
    }

    fn reconcile(&self, sink: &mut dyn ReportSink) -> Result<ReconcileReport> {
        let parameter_file = self.workspace.join(PARAMETER_FILE);

        if !self.workspace.is_dir() {
            return Err(Error::NotFound {
                what: "Workspace directory",
                path: self.workspace.clone(),
            });
        }

        sink.info(&format!(
            "Starting validation process for '{}'",
            parameter_file.display()
        ));
        sink.info("Analysis restricted to the following item types:");
        sink.info(&self.item_types.to_string());
        if self.excluded.is_empty() {
            sink.info("No paths will be excluded from the analysis.");
        } else {
            sink.info("The following paths will be excluded from the analysis:");
            for excluded in &self.excluded {
                sink.info(excluded);
            }
        }

        let document = ParameterDocument::load(&self.workspace)?;

        let entries = replacement_entries(&document, &self.item_types)?;
        sink.debug(&format!("Kept {} replacement entries.", entries.len()));

        let matcher = PathNameMatcher::new(&self.item_types)?;
        let from_paths = file_path_names(&entries, &matcher);
        for skipped in &from_paths.skipped {
            sink.debug(&format!("Skipping file_path '{skipped}': no artifact of a selected type."));
        }
        let from_names = item_names(&entries);
        sink.debug(&format!(
            "Parameter file references {} artifacts by file_path and {} by item_name.",
            from_paths.names.len(),
            from_names.len()
        ));

        let excluded = resolve_exclusions(&self.workspace, &self.excluded, sink);
        let artifacts = project_artifacts(&self.workspace, &self.item_types, &excluded, sink)?;
        sink.debug(&format!("Project declares {} artifacts.", artifacts.len()));

        let referenced: BTreeSet<String> =
            from_paths.names.union(&from_names).cloned().collect();

        let mut findings = Vec::with_capacity(self.axes.len());
        for axis in &self.axes {
            let (subject, reference) = match axis {
                Axis::FilePath => (&from_paths.names, &artifacts),
                Axis::ItemName => (&from_names, &artifacts),
                Axis::Project => (&artifacts, &referenced),
            };
            findings.push(report_axis(*axis, subject, reference, sink)?);
        }

        sink.info(&format!(
            "Finished validation process for '{}'",
            parameter_file.display()
        ));

        Ok(ReconcileReport {
            parameter_file: parameter_file.display().to_string(),
            item_types: self.item_types.iter().map(str::to_string).collect(),
            project_artifacts: artifacts,
            file_path_names: from_paths.names,
            item_names: from_names,
            findings,
        })
    }
}
