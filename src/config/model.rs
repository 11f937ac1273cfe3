//! Config struct definition.

use super::types::{BuiltinSuite, ExternalQuery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Validated configuration for one analysis run.
///
/// The serialized form uses the camelCase keys the cache file has always
/// used. Missing keys deserialize to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Display label.
    pub name: String,

    /// Skip the default query suite and run only what is listed here.
    pub disable_default_queries: bool,

    /// Absolute paths of local query files or directories, all inside the workspace.
    pub additional_queries: Vec<PathBuf>,

    /// Queries pulled from other repositories.
    pub external_queries: Vec<ExternalQuery>,

    /// Extra built-in suites.
    pub additional_suites: Vec<BuiltinSuite>,

    /// Globs of paths excluded from analysis.
    pub paths_ignore: Vec<String>,

    /// Globs of paths included in analysis.
    pub paths: Vec<String>,
}
