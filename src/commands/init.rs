//! Implementation of the `query-config init` command.
//!
//! Returns the job's config, building and caching it on the first call.

use crate::config::{Config, ConfigSource};
use crate::context::JobContext;
use crate::error::Result;
use tracing::info;

/// Load the config for this job and render it as JSON.
pub fn run_init(ctx: &JobContext, config_file: Option<&str>) -> Result<String> {
    let loaded = Config::load(ctx, config_file)?;

    match loaded.source {
        ConfigSource::Cache => info!(
            cache = %ctx.config_file().display(),
            "using cached configuration"
        ),
        ConfigSource::Initialized => info!(
            cache = %ctx.config_file().display(),
            "configuration initialized"
        ),
    }

    loaded.config.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::test_support::TestJob;

    #[test]
    fn test_init_prints_cached_json() {
        let job = TestJob::new();
        job.write("codeql.yml", "name: demo\nqueries:\n  - uses: security-extended\n");

        let output = run_init(&job.ctx, Some("codeql.yml")).unwrap();

        let cached = std::fs::read_to_string(job.ctx.config_file()).unwrap();
        assert_eq!(output, cached);
        let config = Config::from_json(&output).unwrap();
        assert_eq!(config.name, "demo");
    }

    #[test]
    fn test_init_twice_is_stable() {
        let job = TestJob::new();
        job.write("codeql.yml", "paths: [src]\n");

        let first = run_init(&job.ctx, Some("codeql.yml")).unwrap();
        let second = run_init(&job.ctx, Some("codeql.yml")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_init_reports_invalid_query() {
        let job = TestJob::new();
        job.write("codeql.yml", "queries:\n  - uses: owner-only@v1\n");

        let err = run_init(&job.ctx, Some("codeql.yml")).unwrap_err();

        assert!(matches!(err, ConfigError::QueryUsesIncorrect { .. }));
        assert!(err.to_string().ends_with("Found: owner-only@v1"));
    }
}
