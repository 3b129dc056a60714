//! File readers used by the loading strategies.
//!
//! Two formats are supported:
//!
//! - **Serialized documents**: YAML or JSON, detected by content rather than by
//!   file extension. JSON is valid YAML, so both go through `serde_yaml`.
//! - **Properties files**: flat `key = value` lines as used by
//!   `apiKey.properties` credential files.

use crate::configuration::Configuration;
use crate::errors::{ConfigurationError, ConfigurationResult};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

#[cfg(test)]
#[path = "parsers_tests.rs"]
mod tests;

/// Parses a YAML or JSON document into a configuration mapping.
///
/// An empty document (or one holding only comments) yields an empty mapping.
///
/// # Errors
///
/// Returns `ConfigurationError::ParseError` when the content is malformed or
/// when the document root is not a mapping. `source` is only used to build the
/// error message.
pub fn parse_serialized(content: &str, source: &str) -> ConfigurationResult<Configuration> {
    if is_blank_document(content) {
        return Ok(Configuration::new());
    }

    let value: Value =
        serde_yaml::from_str(content).map_err(|e| ConfigurationError::ParseError {
            path: source.to_string(),
            reason: e.to_string(),
        })?;

    match value {
        Value::Null => Ok(Configuration::new()),
        Value::Object(map) => Ok(Configuration::from(map)),
        other => Err(ConfigurationError::ParseError {
            path: source.to_string(),
            reason: format!(
                "expected a mapping at the document root, found {}",
                value_kind(&other)
            ),
        }),
    }
}

/// Reads and parses a YAML or JSON configuration file.
///
/// # Errors
///
/// - `ConfigurationError::FileNotFound` if the file does not exist
/// - `ConfigurationError::FileAccessError` if it cannot be read as UTF-8 text
/// - `ConfigurationError::ParseError` if the content is malformed
pub fn read_serialized_file(path: &Path) -> ConfigurationResult<Configuration> {
    let shown = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigurationError::FileNotFound {
            path: shown.clone(),
        },
        _ => ConfigurationError::FileAccessError {
            path: shown.clone(),
            reason: e.to_string(),
        },
    })?;

    debug!("Parsing configuration file {}", shown);
    parse_serialized(&content, &shown)
}

/// Parses the content of a properties file.
///
/// Lines are trimmed; blank lines, lines starting with `#` and lines without
/// `=` are ignored. Each remaining line is split on its first `=` and both
/// halves are trimmed. Later duplicates win.
pub fn parse_properties(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// Reads a properties file.
///
/// Missing files, paths that are not regular files and files that are not
/// valid UTF-8 yield an empty mapping.
///
/// # Errors
///
/// Returns `ConfigurationError::FileAccessError` for any other I/O failure.
pub fn read_properties(path: &Path) -> ConfigurationResult<BTreeMap<String, String>> {
    if !path.is_file() {
        debug!("Properties path {} is not a file, skipping", path.display());
        return Ok(BTreeMap::new());
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => {
            return Err(ConfigurationError::FileAccessError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        }
    };

    match String::from_utf8(bytes) {
        Ok(content) => Ok(parse_properties(&content)),
        Err(_) => {
            warn!(
                "Properties file {} is not valid UTF-8, ignoring its content",
                path.display()
            );
            Ok(BTreeMap::new())
        }
    }
}

fn is_blank_document(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
