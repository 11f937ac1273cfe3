//! Building a fresh config from the user's configuration file.

use super::file::ConfigFile;
use super::model::Config;
use crate::context::JobContext;
use crate::error::{ConfigError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Build a config from the optional configuration file input.
    ///
    /// `None` or an empty string means no file was requested, and the
    /// default config is returned. Otherwise the path is resolved against
    /// the workspace and must stay inside it.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Every query reference in the file was valid
    /// * `Err(ConfigError::ConfigFileOutsideWorkspace)` - Path escapes the workspace
    /// * `Err(ConfigError::ConfigFileDoesNotExist)` - Path does not exist
    /// * `Err(_)` - The first query reference error, unchanged
    pub fn init(ctx: &JobContext, config_file: Option<&str>) -> Result<Self> {
        let Some(config_file) = config_file.filter(|f| !f.is_empty()) else {
            debug!("no configuration file was provided");
            return Ok(Config::default());
        };

        let (config, _) = Self::init_from_path(ctx, config_file)?;
        Ok(config)
    }

    /// Like [`Config::init`] with a file, but also returns the decoded file so
    /// callers can report the fields that were ignored.
    pub fn init_from_path(ctx: &JobContext, config_file: &str) -> Result<(Self, ConfigFile)> {
        let path = ctx.resolve(config_file);

        if !ctx.contains(&path) {
            return Err(ConfigError::ConfigFileOutsideWorkspace { config_file: path });
        }
        if !path.exists() {
            return Err(ConfigError::ConfigFileDoesNotExist { config_file: path });
        }

        let file = read_config_file(&path)?;
        let config = Self::from_config_file(ctx, &file)?;
        Ok((config, file))
    }

    /// Apply a decoded configuration file to a default config, resolving
    /// each query reference in document order.
    pub fn from_config_file(ctx: &JobContext, file: &ConfigFile) -> Result<Self> {
        let mut config = Config::default();

        if let Some(name) = &file.name {
            config.name = name.clone();
        }
        if let Some(disable) = file.disable_default_queries {
            config.disable_default_queries = disable;
        }
        for uses in &file.queries {
            config.add_query(ctx, uses)?;
        }
        config.paths_ignore = file.paths_ignore.clone();
        config.paths = file.paths.clone();

        Ok(config)
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::io("read config file", path, e))?;

    let file = ConfigFile::from_yaml(&content)?;
    for field in &file.ignored {
        debug!(key = %field.key, reason = field.reason, "ignored configuration field");
    }
    Ok(file)
}
