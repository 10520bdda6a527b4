//! Error types for paramlint-core

use std::path::PathBuf;

/// Result type for paramlint-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions that abort a reconciliation run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workspace directory or parameter file missing
    #[error("{what} was not found at specified path '{}'.", .path.display())]
    NotFound { what: &'static str, path: PathBuf },

    /// Parameter file exists but is not valid
    #[error("Failed to parse parameter file at '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Parameter file parses to no data
    #[error("No valid data found in parameter file at '{}'.", .path.display())]
    EmptyDocument { path: PathBuf },

    /// Comparison axis with no report configuration
    #[error("Invalid analysis axis specified: '{axis}'.")]
    InvalidAxis { axis: String },

    /// Item type name that cannot be turned into a matching pattern
    #[error("Invalid item type '{item_type}': {message}")]
    InvalidItemType { item_type: String, message: String },

    /// Filesystem error from paramlint-fs
    #[error(transparent)]
    Fs(#[from] paramlint_fs::Error),
}
