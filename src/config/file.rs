//! Schema-driven decoding of the user's YAML configuration file.
//!
//! Every recognized key is applied only when it has the expected type.
//! Anything else (unknown keys, wrong types, non-string list entries) is
//! recorded as an [`IgnoredField`] instead of failing, so older tool versions
//! keep working with newer config files.

use crate::error::Result;
use serde_yaml::{Mapping, Value};
use std::fmt;

const KEY_NAME: &str = "name";
const KEY_DISABLE_DEFAULT_QUERIES: &str = "disable-default-queries";
const KEY_QUERIES: &str = "queries";
const KEY_PATHS_IGNORE: &str = "paths-ignore";
const KEY_PATHS: &str = "paths";

/// A field of the YAML document that was skipped during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredField {
    /// Location of the field, e.g. `paths[2]` or `queries[0].uses`.
    pub key: String,

    /// Why it was skipped.
    pub reason: &'static str,
}

impl IgnoredField {
    fn new(key: impl Into<String>, reason: &'static str) -> Self {
        Self {
            key: key.into(),
            reason,
        }
    }
}

impl fmt::Display for IgnoredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.reason)
    }
}

/// The typed view of a configuration file, before query references are
/// resolved against the workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub name: Option<String>,
    pub disable_default_queries: Option<bool>,
    /// Raw `uses` values in document order.
    pub queries: Vec<String>,
    pub paths_ignore: Vec<String>,
    pub paths: Vec<String>,
    /// Fields that were present but not applied.
    pub ignored: Vec<IgnoredField>,
}

impl ConfigFile {
    /// Decode a YAML document.
    ///
    /// Only malformed YAML syntax is an error. An empty document decodes to
    /// an empty `ConfigFile`.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let document: Value = serde_yaml::from_str(yaml)?;
        Ok(Self::from_value(document))
    }

    fn from_value(document: Value) -> Self {
        let mut file = ConfigFile::default();
        match document {
            Value::Null => {}
            Value::Mapping(mapping) => file.decode_mapping(mapping),
            _ => file
                .ignored
                .push(IgnoredField::new("<root>", "document is not a mapping")),
        }
        file
    }

    fn decode_mapping(&mut self, mapping: Mapping) {
        for (key, value) in mapping {
            let Some(key) = key.as_str() else {
                self.ignored
                    .push(IgnoredField::new(format!("{:?}", key), "key is not a string"));
                continue;
            };

            match key {
                KEY_NAME => match value {
                    Value::String(name) if !name.is_empty() => self.name = Some(name),
                    Value::String(_) => {}
                    _ => self.ignored.push(IgnoredField::new(key, "expected a string")),
                },
                KEY_DISABLE_DEFAULT_QUERIES => match value {
                    Value::Bool(disable) => self.disable_default_queries = Some(disable),
                    _ => self.ignored.push(IgnoredField::new(key, "expected a boolean")),
                },
                KEY_QUERIES => self.decode_queries(value),
                KEY_PATHS_IGNORE => {
                    self.paths_ignore = string_list(key, value, &mut self.ignored);
                }
                KEY_PATHS => {
                    self.paths = string_list(key, value, &mut self.ignored);
                }
                _ => self.ignored.push(IgnoredField::new(key, "unknown key")),
            }
        }
    }

    fn decode_queries(&mut self, value: Value) {
        let Value::Sequence(entries) = value else {
            self.ignored
                .push(IgnoredField::new(KEY_QUERIES, "expected a list"));
            return;
        };

        for (index, entry) in entries.iter().enumerate() {
            match entry.get("uses").and_then(Value::as_str) {
                Some(uses) => self.queries.push(uses.to_string()),
                None => self.ignored.push(IgnoredField::new(
                    format!("{}[{}].uses", KEY_QUERIES, index),
                    "expected a string",
                )),
            }
        }
    }
}

/// Collect the string entries of a YAML list, recording everything else.
fn string_list(key: &str, value: Value, ignored: &mut Vec<IgnoredField>) -> Vec<String> {
    let Value::Sequence(entries) = value else {
        ignored.push(IgnoredField::new(key, "expected a list"));
        return Vec::new();
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Value::String(s) => Some(s),
            _ => {
                ignored.push(IgnoredField::new(
                    format!("{}[{}]", key, index),
                    "expected a string",
                ));
                None
            }
        })
        .collect()
}
