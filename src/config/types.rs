//! Value types referenced by [`Config`](super::Config).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in query suites shipped with the analysis bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinSuite {
    SecurityExtended,
    SecurityAndQuality,
}

impl BuiltinSuite {
    /// Every accepted suite, in the order they are listed to users.
    pub const ALL: [BuiltinSuite; 2] = [Self::SecurityExtended, Self::SecurityAndQuality];

    /// Name as written in a `uses` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SecurityExtended => "security-extended",
            Self::SecurityAndQuality => "security-and-quality",
        }
    }

    /// Look up a suite by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suite| suite.as_str() == name)
    }
}

impl fmt::Display for BuiltinSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Queries hosted in another repository, pinned to a ref.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalQuery {
    /// `owner/repo`.
    pub repository: String,

    /// Branch, tag, or commit.
    #[serde(rename = "ref")]
    pub git_ref: String,

    /// Sub-path inside the repository; empty means the repository root.
    #[serde(default)]
    pub path: String,
}

impl ExternalQuery {
    pub fn new(repository: impl Into<String>, git_ref: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            git_ref: git_ref.into(),
            path: String::new(),
        }
    }

    /// Set the sub-path inside the repository.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}
