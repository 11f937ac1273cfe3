//! Implementation of the `query-config check` command.
//!
//! Validates a configuration file the same way `init` does, but never reads
//! or writes the cache. Ignored fields are listed so typos surface early.

use crate::config::Config;
use crate::context::JobContext;
use crate::error::Result;

/// Validate `config_file` and render a human-readable summary.
pub fn run_check(ctx: &JobContext, config_file: Option<&str>) -> Result<String> {
    let Some(config_file) = config_file.filter(|f| !f.is_empty()) else {
        return Ok("No configuration file provided; default queries only.".to_string());
    };

    let (config, file) = Config::init_from_path(ctx, config_file)?;

    let mut summary = String::new();
    summary.push_str(&format!(
        "Configuration file: {}\n",
        ctx.resolve(config_file).display()
    ));
    if !config.name.is_empty() {
        summary.push_str(&format!("Name: {}\n", config.name));
    }
    summary.push_str(&format!(
        "Default queries: {}\n",
        if config.disable_default_queries {
            "disabled"
        } else {
            "enabled"
        }
    ));
    summary.push_str(&format!(
        "Local queries: {}\n",
        config.additional_queries.len()
    ));
    summary.push_str(&format!(
        "External queries: {}\n",
        config.external_queries.len()
    ));
    summary.push_str(&format!(
        "Built-in suites: {}\n",
        config.additional_suites.len()
    ));
    summary.push_str(&format!("Paths: {}\n", config.paths.len()));
    summary.push_str(&format!("Paths ignored: {}", config.paths_ignore.len()));

    if !file.ignored.is_empty() {
        summary.push_str("\n\nIgnored fields:");
        for field in &file.ignored {
            summary.push_str(&format!("\n  - {}", field));
        }
    }

    Ok(summary)
}
