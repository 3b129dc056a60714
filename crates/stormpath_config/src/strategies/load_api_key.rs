//! Loads API key credentials from a `.properties` file.

use super::file_path::FilePath;
use crate::configuration::Configuration;
use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::parsers::read_properties;
use crate::strategy::ConfigStrategy;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(test)]
#[path = "load_api_key_tests.rs"]
mod tests;

pub(crate) const API_KEY_ID_PROPERTY: &str = "apiKey.id";
pub(crate) const API_KEY_SECRET_PROPERTY: &str = "apiKey.secret";

/// Reads `apiKey.id` and `apiKey.secret` from a properties file into
/// `client.apiKey.id` and `client.apiKey.secret`.
///
/// Other keys under `client` and `client.apiKey` are preserved. An optional
/// file that is missing, or that contains no properties at all, leaves the
/// configuration unchanged.
///
/// # Errors
///
/// - `ConfigurationError::FileNotFound` / `HomeNotSet` for a missing required file
/// - `ConfigurationError::IncompleteCredentials` when the file has properties
///   (or is required) but lacks a non-empty id or secret
#[derive(Debug, Clone)]
pub struct LoadApiKeyConfig {
    path: FilePath,
}

impl LoadApiKeyConfig {
    pub fn new(path: impl AsRef<Path>, must_exist: bool) -> Self {
        Self {
            path: FilePath::new(path.as_ref(), must_exist),
        }
    }

    /// Creates the strategy with an explicit home directory for `~` expansion.
    pub fn with_home_dir(path: impl AsRef<Path>, must_exist: bool, home: Option<PathBuf>) -> Self {
        Self {
            path: FilePath::with_home(path.as_ref(), must_exist, home),
        }
    }
}

impl ConfigStrategy for LoadApiKeyConfig {
    fn name(&self) -> &'static str {
        "LoadApiKeyConfig"
    }

    fn process(&self, mut config: Configuration) -> ConfigurationResult<Configuration> {
        let Some(path) = self.path.resolve()? else {
            return Ok(config);
        };

        let properties = read_properties(path)?;
        if properties.is_empty() && !self.path.must_exist() {
            debug!("API key file {} has no properties, skipping", path.display());
            return Ok(config);
        }

        let non_empty = |key: &str| {
            properties
                .get(key)
                .filter(|value| !value.is_empty())
                .cloned()
        };
        let (Some(id), Some(secret)) = (
            non_empty(API_KEY_ID_PROPERTY),
            non_empty(API_KEY_SECRET_PROPERTY),
        ) else {
            return Err(ConfigurationError::IncompleteCredentials {
                path: self.path.display(),
            });
        };

        debug!("Loaded API key credentials from {}", path.display());
        config.set_path("client.apiKey.id", Value::String(id));
        config.set_path("client.apiKey.secret", Value::String(secret));
        Ok(config)
    }
}
