//! Query configuration for a code-analysis job.
//!
//! This module turns the optional YAML file named by the action input into a
//! validated [`Config`], and caches that config as JSON in the job-scoped
//! runner workspace so later steps in the same job reuse it verbatim.
//! Unknown or mistyped YAML fields are ignored for forward compatibility.

mod cache;
mod file;
mod model;
mod operations;
mod query;
pub mod types;


// Re-export public API
pub use cache::{ConfigSource, Loaded};
pub use file::{ConfigFile, IgnoredField};
pub use model::Config;
pub use types::{BuiltinSuite, ExternalQuery};
