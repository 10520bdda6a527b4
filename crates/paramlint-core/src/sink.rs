//! Destinations for run messages
//!
//! The engine never configures logging itself. It writes leveled messages to
//! a [`ReportSink`], which the caller provides.

use serde::Serialize;

/// Message severity, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Receives the messages of a run.
pub trait ReportSink {
    fn debug(&mut self, message: &str);
    fn info(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    fn error(&mut self, message: &str);
    fn critical(&mut self, message: &str);

    /// Dispatch on a runtime severity.
    fn log(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => self.debug(message),
            Severity::Info => self.info(message),
            Severity::Warning => self.warning(message),
            Severity::Error => self.error(message),
            Severity::Critical => self.critical(message),
        }
    }
}

/// Forwards messages to `tracing` under the `paramlint` target.
///
/// `tracing` has no critical level; critical messages are emitted as errors
/// carrying `critical = true`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn debug(&mut self, message: &str) {
        tracing::debug!(target: "paramlint", "{message}");
    }

    fn info(&mut self, message: &str) {
        tracing::info!(target: "paramlint", "{message}");
    }

    fn warning(&mut self, message: &str) {
        tracing::warn!(target: "paramlint", "{message}");
    }

    fn error(&mut self, message: &str) {
        tracing::error!(target: "paramlint", "{message}");
    }

    fn critical(&mut self, message: &str) {
        tracing::error!(target: "paramlint", critical = true, "{message}");
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    records: Vec<(Severity, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[(Severity, String)] {
        &self.records
    }

    /// Messages at exactly `severity`, in emission order.
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.records
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Messages at `severity` or above, rendered as `[level] message` lines.
    pub fn render(&self, min_severity: Severity) -> String {
        self.records
            .iter()
            .filter(|(s, _)| *s >= min_severity)
            .map(|(s, m)| format!("[{s}] {m}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&mut self, severity: Severity, message: &str) {
        self.records.push((severity, message.to_string()));
    }
}

impl ReportSink for RecordingSink {
    fn debug(&mut self, message: &str) {
        self.push(Severity::Debug, message);
    }

    fn info(&mut self, message: &str) {
        self.push(Severity::Info, message);
    }

    fn warning(&mut self, message: &str) {
        self.push(Severity::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.push(Severity::Error, message);
    }

    fn critical(&mut self, message: &str) {
        self.push(Severity::Critical, message);
    }
}
