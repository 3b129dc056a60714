//! The configuration tree threaded through a loader pipeline.
//!
//! A [`Configuration`] is a mapping from string keys to JSON-like values
//! (scalars, nested mappings, sequences). Strategies take ownership of the
//! current tree and hand back the next one; whether they mutate it in place
//! or build a fresh value is invisible to the caller.
//!
//! Paths passed to the accessor methods are dotted (`"client.apiKey.id"`).
//! Configuration keys never contain dots, so no escaping is supported.

use crate::helpers::is_truthy;
use crate::merge::deep_merge;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "configuration_tests.rs"]
mod tests;

/// Hierarchical configuration value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use stormpath_config::Configuration;
///
/// let mut config = Configuration::new();
/// config.set_path("client.apiKey.id", json!("abc"));
///
/// assert_eq!(config.get_str("client.apiKey.id"), Some("abc"));
/// assert!(config.get_path("client.apiKey.secret").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Map<String, Value>);

impl Configuration {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps a JSON value, returning `None` unless it is a mapping.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the top-level value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value at a dotted path, if every segment resolves.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Returns the string at a dotted path; non-string values yield `None`.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get_path(path).and_then(Value::as_str)
    }

    /// Returns the mapping at a dotted path; non-mapping values yield `None`.
    pub fn get_map(&self, path: &str) -> Option<&Map<String, Value>> {
        self.get_path(path).and_then(Value::as_object)
    }

    /// Applies the loader's truthiness rule to the value at `path`.
    ///
    /// Missing values, `null`, `false`, `0`, empty strings, empty sequences
    /// and empty mappings are all falsy.
    pub fn is_truthy(&self, path: &str) -> bool {
        self.get_path(path).is_some_and(is_truthy)
    }

    /// Writes `value` at a dotted path.
    ///
    /// Missing intermediate mappings are created. An intermediate segment
    /// holding a non-mapping value is replaced by a mapping. Sibling keys of
    /// every intermediate mapping are left untouched.
    pub fn set_path(&mut self, path: &str, value: Value) {
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut current = &mut self.0;
        for segment in parents {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            let Value::Object(map) = entry else {
                return;
            };
            current = map;
        }
        current.insert(last.to_string(), value);
    }

    /// Removes and returns the value at a dotted path.
    pub fn remove_path(&mut self, path: &str) -> Option<Value> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments.split_last()?;

        let mut current = &mut self.0;
        for segment in parents {
            current = current.get_mut(*segment)?.as_object_mut()?;
        }
        current.remove(*last)
    }

    /// Deep-merges `overlay` into this configuration.
    ///
    /// See [`crate::merge::deep_merge`] for the exact rules.
    pub fn merge(&mut self, overlay: &Configuration) {
        deep_merge(&mut self.0, &overlay.0);
    }

    /// Consuming variant of [`Configuration::merge`].
    pub fn merged(mut self, overlay: &Configuration) -> Self {
        self.merge(overlay);
        self
    }

    /// Serializes the tree as JSON with sorted keys and four-space indentation.
    pub fn to_pretty_string(&self) -> serde_json::Result<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.0.serialize(&mut serializer)?;

        // serde_json only ever writes UTF-8.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl From<Map<String, Value>> for Configuration {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Configuration> for Value {
    fn from(config: Configuration) -> Self {
        config.into_value()
    }
}

impl TryFrom<Value> for Configuration {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
