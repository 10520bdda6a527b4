//! The set of artifact types a run is restricted to

use std::collections::BTreeSet;

use paramlint_fs::ArtifactPattern;

use crate::{Error, Result};

/// Item types used when none are configured.
pub const DEFAULT_ITEM_TYPES: [&str; 4] = ["Notebook", "Report", "SemanticModel", "VariableLibrary"];

/// Artifact type names such as `Notebook` or `Report`.
///
/// Drives both the document entry filter and the directory suffix patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTypes(BTreeSet<String>);

impl ItemTypes {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(types.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, item_type: &str) -> bool {
        self.0.contains(item_type)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Type names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// One `*.<type>` directory pattern per type.
    pub fn directory_patterns(&self) -> Result<Vec<ArtifactPattern>> {
        self.iter()
            .map(|item_type| {
                ArtifactPattern::for_item_type(item_type).map_err(|e| Error::InvalidItemType {
                    item_type: item_type.to_string(),
                    message: e.to_string(),
                })
            })
            .collect()
    }

    /// Regex alternation of the escaped type names.
    pub(crate) fn alternation(&self) -> String {
        self.iter().map(regex::escape).collect::<Vec<_>>().join("|")
    }
}

impl std::fmt::Display for ItemTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self.iter().collect::<Vec<_>>().join(", ");
        write!(f, "{joined}")
    }
}

impl<S: Into<String>> FromIterator<S> for ItemTypes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Default for ItemTypes {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_TYPES)
    }
}
