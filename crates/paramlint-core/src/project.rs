//! Artifact names declared by the project tree

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use paramlint_fs::{DirectoryScanner, resolve};

use crate::{ItemTypes, ReportSink, Result, SuffixStripper};

/// Resolve workspace-relative exclusions to canonical absolute paths.
///
/// Exclusions that do not exist are kept (they can never match) and
/// reported as warnings.
pub fn resolve_exclusions<I, S>(
    workspace: &Path,
    excluded: I,
    sink: &mut dyn ReportSink,
) -> HashSet<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    excluded
        .into_iter()
        .map(|relative| {
            let relative = relative.as_ref();
            let joined = workspace.join(relative);
            if !joined.exists() {
                sink.warning(&format!(
                    "Excluded path '{relative}' does not exist within the workspace."
                ));
            }
            resolve(joined)
        })
        .collect()
}

/// Names of all artifact directories below `workspace`.
pub fn project_artifacts(
    workspace: &Path,
    types: &ItemTypes,
    excluded: &HashSet<PathBuf>,
    sink: &mut dyn ReportSink,
) -> Result<BTreeSet<String>> {
    let patterns = types.directory_patterns()?;
    let stripper = SuffixStripper::new(types)?;

    let directories = DirectoryScanner::new(&patterns, excluded).scan(workspace);
    sink.debug(&format!("Found {} artifact directories.", directories.len()));

    let mut names = BTreeSet::new();
    for directory in &directories {
        let Some(dir_name) = directory.file_name().map(|n| n.to_string_lossy()) else {
            continue;
        };
        match stripper.strip(&dir_name) {
            Some(name) => {
                sink.debug(&format!("Artifact '{name}' at '{}'", directory.display()));
                names.insert(name.to_string());
            }
            None => sink.debug(&format!(
                "Directory '{}' has no recognizable artifact name.",
                directory.display()
            )),
        }
    }
    Ok(names)
}
