//! Filesystem abstraction for paramlint
//!
//! Provides canonical path resolution, text reads, settings loading
//! and the artifact directory walk used by the reconciliation engine.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod walk;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::resolve;
pub use walk::{ArtifactPattern, DirectoryScanner};
