//! Command implementations for query-config.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command renders its output as a string so it can
//! be tested without capturing stdout.

mod check;
mod init;
mod show;

use crate::cli::{Cli, Command};
use crate::context::JobContext;
use crate::error::Result;

/// Dispatch a command to its implementation and print its output.
pub fn dispatch(cli: Cli) -> Result<()> {
    let output = run(cli)?;
    println!("{}", output);
    Ok(())
}

/// Resolve the job context and run the command, returning what it prints.
fn run(cli: Cli) -> Result<String> {
    let ctx = JobContext::from_overrides(cli.workspace, cli.runner_workspace)?;

    match cli.command {
        Command::Init(args) => init::run_init(&ctx, args.config_file.as_deref()),
        Command::Show => show::run_show(&ctx),
        Command::Check(args) => check::run_check(&ctx, args.config_file.as_deref()),
        Command::Path => Ok(ctx.config_file().display().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_support::TestJob;
    use clap::Parser;

    fn parse(job: &TestJob, args: &[&str]) -> Cli {
        let workspace = job.ctx.workspace.display().to_string();
        let runner_workspace = job.ctx.runner_workspace.display().to_string();
        let mut argv = vec![
            "query-config",
            "--workspace",
            workspace.as_str(),
            "--runner-workspace",
            runner_workspace.as_str(),
        ];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_path_prints_cache_file() {
        let job = TestJob::new();

        let output = run(parse(&job, &["path"])).unwrap();

        assert_eq!(output, job.ctx.config_file().display().to_string());
    }

    #[test]
    fn test_init_then_show_through_dispatch() {
        let job = TestJob::new();
        job.write("codeql.yml", "name: routed\n");

        let initialized = run(parse(&job, &["init", "--config-file", "codeql.yml"])).unwrap();
        let shown = run(parse(&job, &["show"])).unwrap();

        assert_eq!(initialized, shown);
        assert_eq!(Config::from_json(&shown).unwrap().name, "routed");
    }

    #[test]
    fn test_dispatch_surfaces_command_errors() {
        let job = TestJob::new();

        let err = dispatch(parse(&job, &["show"])).unwrap_err();

        assert!(matches!(err, crate::error::ConfigError::NoCache { .. }));
    }
}
