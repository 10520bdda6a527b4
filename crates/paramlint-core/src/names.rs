//! Artifact name normalization
//!
//! Both sides of the comparison reduce references to a bare artifact name
//! by dropping the `.<type>` suffix of an artifact directory:
//!
//! - document side: `src/Sales.Notebook/notebook-content.py` -> `Sales`
//! - filesystem side: directory `Sales.Notebook` -> `Sales`

use regex::{Regex, RegexBuilder};

use crate::{Error, ItemTypes, Result};

/// Extracts artifact names from `file_path` references.
#[derive(Debug, Clone)]
pub struct PathNameMatcher {
    segment: Option<Regex>,
}

impl PathNameMatcher {
    pub fn new(types: &ItemTypes) -> Result<Self> {
        if types.is_empty() {
            return Ok(Self { segment: None });
        }
        let pattern = format!(r"^(?P<name>[^/\\*]+)\.(?:{})$", types.alternation());
        let segment = Regex::new(&pattern).map_err(|e| Error::InvalidItemType {
            item_type: types.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            segment: Some(segment),
        })
    }

    /// Name of the artifact a `file_path` value points into.
    ///
    /// Returns `None` for wildcard or recursive paths and for paths with no
    /// segment ending in `.<type>` for a configured type. When several
    /// segments qualify the deepest one wins.
    pub fn artifact_name(&self, file_path: &str) -> Option<String> {
        let segment = self.segment.as_ref()?;
        if file_path.contains('*') {
            return None;
        }
        file_path
            .split(['/', '\\'])
            .rev()
            .find_map(|part| segment.captures(part))
            .map(|captures| captures["name"].to_string())
    }
}

/// Strips the type suffix from matched artifact directory names.
#[derive(Debug, Clone)]
pub struct SuffixStripper {
    suffix: Option<Regex>,
}

impl SuffixStripper {
    pub fn new(types: &ItemTypes) -> Result<Self> {
        if types.is_empty() {
            return Ok(Self { suffix: None });
        }
        let pattern = format!(r"^(?P<name>.+)\.(?:{})$", types.alternation());
        let suffix = RegexBuilder::new(&pattern)
            .dot_matches_new_line(true)
            .case_insensitive(cfg!(windows))
            .build()
            .map_err(|e| Error::InvalidItemType {
                item_type: types.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            suffix: Some(suffix),
        })
    }

    /// `Sales.Notebook` -> `Sales`. Only the trailing type suffix is removed.
    pub fn strip<'a>(&self, directory_name: &'a str) -> Option<&'a str> {
        let captures = self.suffix.as_ref()?.captures(directory_name)?;
        captures.name("name").map(|m| m.as_str())
    }
}
