//! Parameter file loading
//!
//! The parameter file (`parameter.yml`) declares deployment-time
//! substitutions. Only the `find_replace` and `key_value_replace` sections
//! matter here; every other key is ignored.

use std::path::{Path, PathBuf};

use paramlint_fs::io;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::{Error, Result};

/// File name of the parameter file inside a workspace directory.
pub const PARAMETER_FILE: &str = "parameter.yml";

/// A parsed parameter file.
///
/// Records stay as raw YAML until [`ReplacementEntry::from_record`] is
/// called on them, so records that get filtered out by type are never
/// required to be well formed.
#[derive(Debug, Clone, Default)]
pub struct ParameterDocument {
    path: PathBuf,
    find_replace: Vec<Value>,
    key_value_replace: Vec<Value>,
}

#[derive(Deserialize)]
struct Sections {
    #[serde(default, deserialize_with = "null_as_empty")]
    find_replace: Vec<Value>,

    #[serde(default, deserialize_with = "null_as_empty")]
    key_value_replace: Vec<Value>,
}

/// One record of a replacement section.
///
/// `file_path` and `item_name` accept either a single string or a list of
/// strings in the file and are always held as a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReplacementEntry {
    #[serde(default)]
    pub item_type: Option<String>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub file_path: Vec<String>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub item_name: Vec<String>,
}

/// The reference fields of a [`ReplacementEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    /// `file_path`: path-style references
    FilePath,
    /// `item_name`: name-style references
    ItemName,
}

impl EntryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FilePath => "file_path",
            Self::ItemName => "item_name",
        }
    }
}

impl ReplacementEntry {
    /// Normalize one raw record of the document at `path`.
    pub fn from_record(record: &Value, path: &Path) -> Result<Self> {
        serde_yaml::from_value(record.clone()).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Values of the given field, empty when the field was absent.
    pub fn values(&self, field: EntryField) -> &[String] {
        match field {
            EntryField::FilePath => &self.file_path,
            EntryField::ItemName => &self.item_name,
        }
    }
}

impl ParameterDocument {
    /// Load `<workspace>/parameter.yml`.
    pub fn load(workspace: &Path) -> Result<Self> {
        let path = workspace.join(PARAMETER_FILE);
        let content = match io::read_text(&path) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => {
                return Err(Error::NotFound {
                    what: PARAMETER_FILE,
                    path: workspace.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&content, &path)
    }

    /// Parse parameter file content read from `path`.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let parse_error = |message: String| Error::Parse {
            path: path.to_path_buf(),
            message,
        };

        let value: Value =
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        match &value {
            Value::Null => {
                return Err(Error::EmptyDocument {
                    path: path.to_path_buf(),
                });
            }
            Value::Mapping(mapping) if mapping.is_empty() => {
                return Err(Error::EmptyDocument {
                    path: path.to_path_buf(),
                });
            }
            Value::Mapping(_) => {}
            _ => return Err(parse_error("top level must be a mapping".to_string())),
        }

        let sections: Sections =
            serde_yaml::from_value(value).map_err(|e| parse_error(e.to_string()))?;
        Ok(Self {
            path: path.to_path_buf(),
            find_replace: sections.find_replace,
            key_value_replace: sections.key_value_replace,
        })
    }

    /// Where the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw records of both sections, `find_replace` first.
    pub fn records(&self) -> impl Iterator<Item = &Value> {
        self.find_replace.iter().chain(&self.key_value_replace)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
