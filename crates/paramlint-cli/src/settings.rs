//! Run settings: command-line flags layered over an optional settings file

use std::collections::BTreeSet;
use std::path::Path;

use paramlint_core::{Axis, ItemTypes};
use paramlint_fs::ConfigStore;
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Settings file looked up in the workspace when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "paramlint.toml";

/// Contents of a settings file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub item_types: Vec<String>,
    pub exclude: Vec<String>,
    pub axes: Vec<String>,
}

impl SettingsFile {
    /// Load the explicit settings file, or the workspace default if present.
    pub fn discover(workspace: &Path, explicit: Option<&Path>) -> Result<Option<Self>> {
        let store = ConfigStore::new();
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::user(format!(
                        "Settings file '{}' was not found.",
                        path.display()
                    )));
                }
                Ok(Some(store.load(path)?))
            }
            None => {
                let path = workspace.join(DEFAULT_SETTINGS_FILE);
                if path.is_file() {
                    tracing::debug!(path = %path.display(), "Using workspace settings file");
                    Ok(Some(store.load(&path)?))
                } else {
                    Ok(None)
                }
            }
        }
    }
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub item_types: ItemTypes,
    pub exclude: BTreeSet<String>,
    pub axes: Vec<Axis>,
}

impl Settings {
    /// Merge with precedence: flags, then settings file, then defaults.
    pub fn resolve(cli: &Cli, file: Option<SettingsFile>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let item_types = pick(&cli.item_types, &file.item_types);
        let item_types = if item_types.is_empty() {
            ItemTypes::default()
        } else {
            ItemTypes::new(item_types.iter().cloned())
        };

        let exclude = pick(&cli.exclude, &file.exclude).iter().cloned().collect();

        let axis_names = pick(&cli.axes, &file.axes);
        let axes = if axis_names.is_empty() {
            Axis::ALL.to_vec()
        } else {
            let mut axes = Vec::new();
            for name in axis_names {
                let axis: Axis = name.parse()?;
                if !axes.contains(&axis) {
                    axes.push(axis);
                }
            }
            axes
        };

        Ok(Self {
            item_types,
            exclude,
            axes,
        })
    }
}

fn pick<'a>(flags: &'a [String], file: &'a [String]) -> &'a [String] {
    if flags.is_empty() { file } else { flags }
}
