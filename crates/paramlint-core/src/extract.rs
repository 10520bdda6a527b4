//! Reference extraction from the parameter file

use std::collections::BTreeSet;

use serde_yaml::Value;

use crate::document::{EntryField, ParameterDocument, ReplacementEntry};
use crate::{ItemTypes, PathNameMatcher, Result};

/// Replacement entries relevant to `types`, in document order.
///
/// `find_replace` entries come first, then `key_value_replace`. An entry is
/// kept when it has no `item_type` or its `item_type` is one of `types`.
/// Only kept entries are normalized, so a dropped record never fails the run
/// however it is shaped.
pub fn replacement_entries(
    document: &ParameterDocument,
    types: &ItemTypes,
) -> Result<Vec<ReplacementEntry>> {
    document
        .records()
        .filter(|record| is_selected(record, types))
        .map(|record| ReplacementEntry::from_record(record, document.path()))
        .collect()
}

/// A non-string `item_type` never names a selected type.
fn is_selected(record: &Value, types: &ItemTypes) -> bool {
    match record.get("item_type") {
        None | Some(Value::Null) => true,
        Some(Value::String(item_type)) => types.contains(item_type),
        Some(_) => false,
    }
}

/// Names referenced through `file_path`, plus the references that yielded
/// no name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePathNames {
    pub names: BTreeSet<String>,
    pub skipped: Vec<String>,
}

/// Artifact names behind every `file_path` value of `entries`.
pub fn file_path_names(entries: &[ReplacementEntry], matcher: &PathNameMatcher) -> FilePathNames {
    let mut result = FilePathNames::default();
    for file_path in field_values(entries, EntryField::FilePath) {
        match matcher.artifact_name(file_path) {
            Some(name) => {
                result.names.insert(name);
            }
            None => result.skipped.push(file_path.to_string()),
        }
    }
    result
}

/// Every `item_name` value of `entries`.
pub fn item_names(entries: &[ReplacementEntry]) -> BTreeSet<String> {
    field_values(entries, EntryField::ItemName)
        .map(str::to_string)
        .collect()
}

fn field_values<'a>(
    entries: &'a [ReplacementEntry],
    field: EntryField,
) -> impl Iterator<Item = &'a str> {
    entries
        .iter()
        .flat_map(move |entry| entry.values(field))
        .map(String::as_str)
}
