//! Error types for query-config.
//!
//! Each configuration failure is its own variant carrying the offending token
//! or path, so callers can branch on the kind without matching message text.
//! The rendered messages are user-facing and must stay stable.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for query-config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A query `uses` value was empty after trimming.
    #[error("\"uses\" value for queries cannot be blank")]
    QueryUsesBlank,

    /// A query `uses` value is not a suite, a local path, or `owner/repo@ref`.
    #[error(
        "\"uses\" value for queries must be a built-in suite (security-extended or security-and-quality), a relative path, or of the form owner/repo@ref\nFound: {uses}"
    )]
    QueryUsesIncorrect { uses: String },

    /// A local query reference does not exist under the workspace.
    #[error(
        "Unable to use queries from local path \"{local_path}\" as the path does not exist in the repository"
    )]
    LocalPathDoesNotExist { local_path: String },

    /// A local query reference resolves outside the workspace.
    #[error(
        "Unable to use queries from local path \"{local_path}\" as it is outside of the repository"
    )]
    LocalPathOutsideOfRepository { local_path: String },

    /// The configuration file resolves outside the workspace.
    #[error("The configuration file \"{}\" is outside of the workspace", .config_file.display())]
    ConfigFileOutsideWorkspace { config_file: PathBuf },

    /// The configuration file does not exist.
    #[error("The configuration file \"{}\" does not exist", .config_file.display())]
    ConfigFileDoesNotExist { config_file: PathBuf },

    /// A required job environment variable is missing or empty.
    #[error("Required environment variable '{name}' is not set")]
    MissingEnv { name: &'static str },

    /// `show` was asked for a cached config before one was written.
    #[error("no cached configuration at '{}'; run `query-config init` first", .path.display())]
    NoCache { path: PathBuf },

    /// The configuration file is not valid YAML.
    #[error("failed to parse configuration YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The cached configuration could not be (de)serialized.
    #[error("failed to (de)serialize cached configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A filesystem operation failed.
    #[error("failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Build an I/O error for the given action and path.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Io { .. } => exit_codes::IO_FAILURE,
            _ => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for query-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuiltinSuite;

    #[test]
    fn query_errors_render_exact_messages() {
        assert_eq!(
            ConfigError::QueryUsesBlank.to_string(),
            "\"uses\" value for queries cannot be blank"
        );

        let err = ConfigError::LocalPathDoesNotExist {
            local_path: "foo.ql".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to use queries from local path \"foo.ql\" as the path does not exist in the repository"
        );

        let err = ConfigError::LocalPathOutsideOfRepository {
            local_path: "../foo.ql".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to use queries from local path \"../foo.ql\" as it is outside of the repository"
        );
    }

    #[test]
    fn incorrect_uses_message_lists_every_builtin_suite() {
        let err = ConfigError::QueryUsesIncorrect {
            uses: "nope".to_string(),
        };
        let suites = BuiltinSuite::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" or ");
        assert_eq!(
            err.to_string(),
            format!(
                "\"uses\" value for queries must be a built-in suite ({}), a relative path, or of the form owner/repo@ref\nFound: nope",
                suites
            )
        );
    }

    #[test]
    fn config_file_errors_render_path() {
        let err = ConfigError::ConfigFileOutsideWorkspace {
            config_file: PathBuf::from("/tmp/other.yml"),
        };
        assert_eq!(
            err.to_string(),
            "The configuration file \"/tmp/other.yml\" is outside of the workspace"
        );

        let err = ConfigError::ConfigFileDoesNotExist {
            config_file: PathBuf::from("/ws/missing.yml"),
        };
        assert_eq!(
            err.to_string(),
            "The configuration file \"/ws/missing.yml\" does not exist"
        );
    }

    #[test]
    fn io_errors_map_to_io_exit_code() {
        let err = ConfigError::io(
            "read",
            "/nowhere",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
        assert_eq!(err.to_string(), "failed to read '/nowhere': gone");
    }

    #[test]
    fn config_errors_map_to_user_exit_code() {
        assert_eq!(ConfigError::QueryUsesBlank.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(
            ConfigError::MissingEnv {
                name: "GITHUB_WORKSPACE"
            }
            .exit_code(),
            exit_codes::USER_ERROR
        );
    }
}
