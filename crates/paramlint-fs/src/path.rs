//! Canonical path resolution

use std::path::{Component, Path, PathBuf};

/// Resolve a path to its absolute, canonical form.
///
/// Existing paths are canonicalized (symlinks followed, no `\\?\` prefix on
/// Windows). For paths that do not exist, the longest existing ancestor is
/// canonicalized and the remaining components are appended lexically, so the
/// result is still comparable with canonical paths produced for real
/// directories.
pub fn resolve(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if let Ok(canonical) = dunce::canonicalize(path) {
        return canonical;
    }

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let cleaned = clean(&absolute);

    let mut tail = Vec::new();
    let mut current = cleaned.as_path();
    loop {
        if let Ok(canonical) = dunce::canonicalize(current) {
            return tail
                .iter()
                .rev()
                .fold(canonical, |acc: PathBuf, part| acc.join(part));
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                current = parent;
            }
            _ => return cleaned,
        }
    }
}

fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
