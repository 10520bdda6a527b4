//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Check a workspace's parameter.yml against its artifact directories
///
/// Reports file_path references to artifacts that do not exist (errors),
/// item_name references to artifacts that do not exist (warnings) and
/// artifacts the parameter file never references (warnings).
///
/// Examples:
///   paramlint src/workspaces/sample
///   paramlint . -t Notebook -t Report -x archive
///   paramlint . --axis file_path --strict
#[derive(Parser, Debug)]
#[command(name = "paramlint")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Workspace directory containing parameter.yml
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Item type to check (repeatable); defaults to Notebook, Report,
    /// SemanticModel and VariableLibrary
    #[arg(short = 't', long = "item-type", value_name = "TYPE")]
    pub item_types: Vec<String>,

    /// Workspace-relative path to leave out of the directory scan (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "PATH")]
    pub exclude: Vec<String>,

    /// Comparison to run: file_path, item_name or project (repeatable)
    #[arg(long = "axis", value_name = "AXIS")]
    pub axes: Vec<String>,

    /// Settings file (.toml, .yaml, .yml or .json); defaults to
    /// <PATH>/paramlint.toml when present
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Exit with status 2 when any file_path reference is broken
    #[arg(long)]
    pub strict: bool,

    /// Results log file, overwritten on each run
    #[arg(long, value_name = "FILE", default_value = "paramlint_results.log", env = "PARAMLINT_LOG_FILE")]
    pub log_file: PathBuf,

    /// Do not write a results log file
    #[arg(long)]
    pub no_log_file: bool,

    /// Enable debug output on the console
    #[arg(short, long)]
    pub verbose: bool,
}
