//! Job-scoped config cache.
//!
//! The first step in a job validates the configuration file and writes the
//! result to `<runner workspace>/config`. Later steps read that file back
//! without validating again. Nothing here deletes the cache; the runner
//! discards the folder when the job ends.

use super::model::Config;
use crate::context::JobContext;
use crate::error::{ConfigError, Result};
use crate::fs::atomic_write_file;
use tracing::debug;

/// Where a loaded config came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read back from the job cache.
    Cache,
    /// Built from the configuration file and written to the cache.
    Initialized,
}

/// A config together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub config: Config,
    pub source: ConfigSource,
}

impl Config {
    /// Serialize to the cache format.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the cache format.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write this config to the job cache, creating the folder if needed.
    pub fn save(&self, ctx: &JobContext) -> Result<()> {
        let json = self.to_json()?;
        let folder = ctx.config_folder();
        std::fs::create_dir_all(folder)
            .map_err(|e| ConfigError::io("create config folder", folder, e))?;
        atomic_write_file(ctx.config_file(), &json)?;
        debug!("Saved config:");
        debug!("{}", json);
        Ok(())
    }

    /// Read the cached config, if one exists.
    pub fn read_cached(ctx: &JobContext) -> Result<Option<Self>> {
        let path = ctx.config_file();
        if !path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::io("read cached config", &path, e))?;
        debug!("Loaded config:");
        debug!("{}", json);
        Self::from_json(&json).map(Some)
    }

    /// Return the cached config, or build one from `config_file`, cache it,
    /// and return it.
    ///
    /// A cached config is returned as stored; `config_file` is only consulted
    /// when the cache is absent.
    pub fn load(ctx: &JobContext, config_file: Option<&str>) -> Result<Loaded> {
        if let Some(config) = Self::read_cached(ctx)? {
            return Ok(Loaded {
                config,
                source: ConfigSource::Cache,
            });
        }

        let config = Self::init(ctx, config_file)?;
        debug!("Initialized config:");
        debug!("{}", config.to_json()?);
        config.save(ctx)?;

        Ok(Loaded {
            config,
            source: ConfigSource::Initialized,
        })
    }
}
