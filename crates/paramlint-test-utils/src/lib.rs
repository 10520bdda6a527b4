//! Shared test utilities for the paramlint workspace.
//!
//! Dev-dependency only. Provides [`TestProject`], a temporary workspace
//! directory with helpers for laying out artifact folders and writing a
//! `parameter.yml`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace directory.
///
/// # Example
///
/// ```rust,no_run
/// use paramlint_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.add_artifact("Sales.Notebook");
/// project.write_parameters("find_replace:\n  - item_name: Sales\n");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary workspace.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the workspace.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `parameter.yml` at the workspace root.
    pub fn write_parameters(&self, content: &str) {
        self.write_file("parameter.yml", content);
    }

    /// Write a file at `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {}", path.display(), e));
    }

    /// Create an artifact directory such as `group/Sales.Notebook`, with a
    /// `.platform` file inside like a real exported item.
    pub fn add_artifact(&self, relative: &str) {
        self.add_dir(relative);
        self.write_file(&format!("{relative}/.platform"), "{}");
    }

    /// Create a plain directory.
    pub fn add_dir(&self, relative: &str) {
        fs::create_dir_all(self.path(relative)).unwrap();
    }

    /// Assert that `relative` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected path to exist: {}",
            full_path.display()
        );
    }
}
