//! Parsing of query `uses` references.
//!
//! A reference is one of, checked in this order:
//! - `./path` inside the workspace (local query file or directory)
//! - a built-in suite name (no `/` and no `@`)
//! - `owner/repo[/sub/path]@ref` (queries in another repository)

use super::model::Config;
use super::types::{BuiltinSuite, ExternalQuery};
use crate::context::JobContext;
use crate::error::{ConfigError, Result};
use tracing::debug;

impl Config {
    /// Classify a `uses` reference and append it to the matching list.
    ///
    /// Local references are checked against the filesystem: the path must
    /// exist, and its symlink-resolved form must stay inside the workspace.
    /// Nothing is appended when an error is returned.
    pub fn add_query(&mut self, ctx: &JobContext, uses: &str) -> Result<()> {
        let uses = uses.trim();
        if uses.is_empty() {
            return Err(ConfigError::QueryUsesBlank);
        }

        if let Some(local_path) = uses.strip_prefix("./") {
            return self.add_local_query(ctx, local_path);
        }

        if !uses.contains('/') && !uses.contains('@') {
            let suite = BuiltinSuite::from_name(uses).ok_or_else(|| incorrect(uses))?;
            debug!(suite = %suite, "added built-in suite");
            self.additional_suites.push(suite);
            return Ok(());
        }

        let query = parse_external(uses)?;
        debug!(
            repository = %query.repository,
            git_ref = %query.git_ref,
            path = %query.path,
            "added external query"
        );
        self.external_queries.push(query);
        Ok(())
    }

    fn add_local_query(&mut self, ctx: &JobContext, local_path: &str) -> Result<()> {
        let absolute = ctx.join(local_path);

        if !absolute.exists() {
            return Err(ConfigError::LocalPathDoesNotExist {
                local_path: local_path.to_string(),
            });
        }

        // Catches both `..` traversal and symlinks pointing out of the repository.
        if !ctx.contains_real(&absolute)? {
            return Err(ConfigError::LocalPathOutsideOfRepository {
                local_path: local_path.to_string(),
            });
        }

        debug!(path = %absolute.display(), "added local query");
        self.additional_queries.push(absolute);
        Ok(())
    }
}

/// Parse `owner/repo[/sub/path]@ref`.
///
/// Only the first two `/`-separated fields are structural; everything after
/// the second `/` is kept verbatim as the sub-path.
fn parse_external(uses: &str) -> Result<ExternalQuery> {
    let mut at = uses.split('@');
    let (Some(location), Some(git_ref), None) = (at.next(), at.next(), at.next()) else {
        return Err(incorrect(uses));
    };
    if git_ref.is_empty() {
        return Err(incorrect(uses));
    }

    let mut fields = location.splitn(3, '/');
    let (Some(owner), Some(repo)) = (fields.next(), fields.next()) else {
        return Err(incorrect(uses));
    };
    if owner.trim().is_empty() || repo.trim().is_empty() {
        return Err(incorrect(uses));
    }

    let query = ExternalQuery::new(format!("{}/{}", owner, repo), git_ref);
    Ok(match fields.next() {
        Some(path) => query.with_path(path),
        None => query,
    })
}

fn incorrect(uses: &str) -> ConfigError {
    ConfigError::QueryUsesIncorrect {
        uses: uses.to_string(),
    }
}
