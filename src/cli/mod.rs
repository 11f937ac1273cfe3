//! CLI argument parsing for query-config.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Load, validate, and cache the query configuration for a code-analysis job.
///
/// The first step of a job validates the configuration file and caches the
/// result in the runner workspace; later steps read the cache.
#[derive(Parser, Debug)]
#[command(name = "query-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository root (defaults to $GITHUB_WORKSPACE).
    #[arg(long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Job-scoped folder holding the config cache (defaults to $RUNNER_WORKSPACE).
    #[arg(long, global = true, value_name = "DIR")]
    pub runner_workspace: Option<PathBuf>,

    /// Log state transitions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for query-config.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the job's config, initializing and caching it on first use.
    ///
    /// Prints the config as JSON.
    Init(ConfigFileArgs),

    /// Print the cached config as JSON.
    Show,

    /// Validate a configuration file without touching the cache.
    ///
    /// Prints a summary and any fields that were ignored.
    Check(ConfigFileArgs),

    /// Print the path of the config cache file.
    Path,
}

/// Arguments naming the user's configuration file.
#[derive(Args, Debug, Default)]
pub struct ConfigFileArgs {
    /// Configuration file, relative to the workspace.
    #[arg(long, env = "INPUT_CONFIG-FILE", value_name = "FILE")]
    pub config_file: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
