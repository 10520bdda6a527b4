//! Reconciliation engine for paramlint
//!
//! Compares the artifacts a `parameter.yml` refers to with the artifact
//! directories that actually exist in a workspace:
//!
//! - **file_path axis**: path-style references with no matching directory
//!   (errors, the deployment would rewrite nothing)
//! - **item_name axis**: name-style references with no matching directory
//!   (warnings)
//! - **project axis**: directories the parameter file never mentions
//!   (warnings, may be intentional)
//!
//! # Example
//!
//! ```no_run
//! use paramlint_core::{ItemTypes, Reconciler, TracingSink};
//!
//! let report = Reconciler::new("src/workspaces/sample", ItemTypes::new(["Notebook", "Report"]))
//!     .with_excluded(["archive"])
//!     .run(&mut TracingSink)?;
//! assert!(!report.has_errors());
//! # Ok::<(), paramlint_core::Error>(())
//! ```

pub mod document;
pub mod engine;
pub mod error;
pub mod extract;
pub mod item_types;
pub mod names;
pub mod project;
pub mod report;
pub mod sink;

pub use document::{EntryField, PARAMETER_FILE, ParameterDocument, ReplacementEntry};
pub use engine::{ReconcileReport, Reconciler};
pub use error::{Error, Result};
pub use item_types::{DEFAULT_ITEM_TYPES, ItemTypes};
pub use names::{PathNameMatcher, SuffixStripper};
pub use report::{AXIS_CONFIGS, Axis, AxisConfig, Finding, report_axis};
pub use sink::{RecordingSink, ReportSink, Severity, TracingSink};
