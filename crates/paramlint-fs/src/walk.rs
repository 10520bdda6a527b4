//! Artifact directory discovery
//!
//! Walks a project tree depth-first and collects every directory whose base
//! name matches one of a set of glob patterns such as `*.Notebook`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};

use crate::{Error, Result, path::resolve};

/// A base-name glob (`*` and `?` wildcards) for artifact directories.
///
/// Matching is case-insensitive on Windows and case-sensitive elsewhere,
/// mirroring how the host filesystem compares names.
#[derive(Debug, Clone)]
pub struct ArtifactPattern {
    glob: String,
    regex: Regex,
}

impl ArtifactPattern {
    /// Compile a glob pattern.
    pub fn new(glob: &str) -> Result<Self> {
        let mut expr = String::from("^");
        for ch in glob.chars() {
            match ch {
                '*' => expr.push_str(".*"),
                '?' => expr.push('.'),
                other => expr.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
            }
        }
        expr.push('$');

        let regex = RegexBuilder::new(&expr)
            .dot_matches_new_line(true)
            .case_insensitive(cfg!(windows))
            .build()
            .map_err(|e| Error::InvalidPattern {
                pattern: glob.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            glob: glob.to_string(),
            regex,
        })
    }

    /// The `*.<item_type>` pattern for one artifact type.
    pub fn for_item_type(item_type: &str) -> Result<Self> {
        Self::new(&format!("*.{item_type}"))
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.glob
    }
}

/// Depth-first artifact directory scanner.
///
/// Excluded paths must already be resolved with [`resolve`]; a directory is
/// skipped (with its whole subtree) only when its own resolved path is a
/// member of the set.
#[derive(Debug)]
pub struct DirectoryScanner<'a> {
    patterns: &'a [ArtifactPattern],
    excluded: &'a HashSet<PathBuf>,
}

impl<'a> DirectoryScanner<'a> {
    pub fn new(patterns: &'a [ArtifactPattern], excluded: &'a HashSet<PathBuf>) -> Self {
        Self { patterns, excluded }
    }

    /// Collect matching directories below `root` in pre-order.
    ///
    /// The root itself is never reported. Unreadable or vanished
    /// directories contribute nothing and do not abort the scan.
    pub fn scan(&self, root: &Path) -> Vec<PathBuf> {
        let mut found = Vec::new();
        let mut ancestry = vec![resolve(root)];
        self.walk(root, &mut ancestry, &mut found);
        found
    }

    fn walk(&self, dir: &Path, ancestry: &mut Vec<PathBuf>, found: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(path = %dir.display(), error = %e, "Skipping unreadable directory");
                return;
            }
        };

        let mut children: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        children.sort();

        for child in children {
            let Ok(resolved) = dunce::canonicalize(&child) else {
                // Vanished between listing and resolution
                continue;
            };

            if self.excluded.contains(&resolved) {
                tracing::debug!(path = %child.display(), "Skipping excluded directory");
                continue;
            }

            let name = child
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if self.patterns.iter().any(|p| p.matches(&name)) {
                found.push(child.clone());
            }

            if ancestry.contains(&resolved) {
                tracing::debug!(path = %child.display(), "Not following directory cycle");
                continue;
            }

            ancestry.push(resolved);
            self.walk(&child, ancestry, found);
            ancestry.pop();
        }
    }
}
