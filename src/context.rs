//! Job context resolution for query-config.
//!
//! The loader never reads process-wide state on its own. Everything it needs
//! from the CI job (the checked-out workspace and the job-scoped working
//! folder that holds the cache) is resolved once into a [`JobContext`] and
//! passed in explicitly.

use crate::error::{ConfigError, Result};
use crate::fs::{join_under, normalize_lexically, resolve_against};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the checked-out repository root.
pub const WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";

/// Environment variable naming the job-scoped working folder.
pub const RUNNER_WORKSPACE_ENV: &str = "RUNNER_WORKSPACE";

/// File name of the cached config inside the runner workspace.
pub const CONFIG_CACHE_FILE: &str = "config";

/// Resolved paths for one analysis job. Both paths are absolute and
/// lexically normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobContext {
    /// Repository root that local query paths and the config file must stay inside.
    pub workspace: PathBuf,

    /// Job-scoped folder holding the config cache.
    pub runner_workspace: PathBuf,
}

impl JobContext {
    /// Build a context from explicit paths.
    ///
    /// Relative paths are made absolute against the current directory, so
    /// containment checks always compare absolute paths.
    pub fn new(
        workspace: impl Into<PathBuf>,
        runner_workspace: impl Into<PathBuf>,
    ) -> Result<Self> {
        Ok(Self {
            workspace: absolute(workspace.into())?,
            runner_workspace: absolute(runner_workspace.into())?,
        })
    }

    /// Build a context from explicit paths where given, falling back to
    /// `GITHUB_WORKSPACE` and `RUNNER_WORKSPACE` for the rest.
    ///
    /// # Returns
    ///
    /// * `Ok(JobContext)` - Both paths resolved
    /// * `Err(ConfigError::MissingEnv)` - A path was not given and its variable is missing or empty
    pub fn from_overrides(
        workspace: Option<PathBuf>,
        runner_workspace: Option<PathBuf>,
    ) -> Result<Self> {
        let workspace = match workspace {
            Some(path) => path,
            None => PathBuf::from(required_env(WORKSPACE_ENV)?),
        };
        let runner_workspace = match runner_workspace {
            Some(path) => path,
            None => PathBuf::from(required_env(RUNNER_WORKSPACE_ENV)?),
        };
        Self::new(workspace, runner_workspace)
    }

    /// Folder that holds the config cache.
    pub fn config_folder(&self) -> &Path {
        &self.runner_workspace
    }

    /// Path of the config cache file.
    pub fn config_file(&self) -> PathBuf {
        self.runner_workspace.join(CONFIG_CACHE_FILE)
    }

    /// Resolve a user-supplied path the way a config file input is resolved:
    /// absolute inputs stay absolute, relative ones land under the workspace.
    pub fn resolve(&self, path: &str) -> PathBuf {
        resolve_against(&self.workspace, path)
    }

    /// Join a repository-relative path onto the workspace.
    pub fn join(&self, relative: &str) -> PathBuf {
        join_under(&self.workspace, relative)
    }

    /// Whether `path` lies inside the workspace.
    ///
    /// The comparison is component-wise, so `/ws-other` is not inside `/ws`
    /// and the workspace itself counts as inside.
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.workspace)
    }

    /// Whether the symlink-resolved form of `path` lies inside the
    /// symlink-resolved workspace. `path` must exist.
    pub fn contains_real(&self, path: &Path) -> Result<bool> {
        let real = path
            .canonicalize()
            .map_err(|e| ConfigError::io("resolve", path, e))?;
        let workspace = self
            .workspace
            .canonicalize()
            .unwrap_or_else(|_| self.workspace.clone());
        Ok(real.starts_with(workspace))
    }
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
    let absolute =
        std::path::absolute(&path).map_err(|e| ConfigError::io("resolve", &path, e))?;
    Ok(normalize_lexically(&absolute))
}

fn required_env(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv { name }),
    }
}
