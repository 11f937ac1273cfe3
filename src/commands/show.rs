//! Implementation of the `query-config show` command.

use crate::config::Config;
use crate::context::JobContext;
use crate::error::{ConfigError, Result};

/// Render the cached config as JSON. Fails when nothing is cached yet.
pub fn run_show(ctx: &JobContext) -> Result<String> {
    let config = Config::read_cached(ctx)?.ok_or_else(|| ConfigError::NoCache {
        path: ctx.config_file(),
    })?;
    config.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestJob;

    #[test]
    fn test_show_without_cache_fails() {
        let job = TestJob::new();

        let err = run_show(&job.ctx).unwrap_err();

        assert!(matches!(err, ConfigError::NoCache { .. }));
        assert!(err.to_string().contains("run `query-config init` first"));
    }

    #[test]
    fn test_show_returns_cached_config() {
        let job = TestJob::new();
        let config = Config {
            name: "cached".to_string(),
            ..Config::default()
        };
        config.save(&job.ctx).unwrap();

        let output = run_show(&job.ctx).unwrap();

        assert_eq!(Config::from_json(&output).unwrap(), config);
    }
}
