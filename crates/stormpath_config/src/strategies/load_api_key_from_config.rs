//! Loads an API key file named inside the configuration itself.

use super::load_api_key::LoadApiKeyConfig;
use crate::configuration::Configuration;
use crate::errors::ConfigurationResult;
use crate::strategy::ConfigStrategy;
use tracing::debug;

#[cfg(test)]
#[path = "load_api_key_from_config_tests.rs"]
mod tests;

const API_KEY_FILE_PATH: &str = "client.apiKey.file";

/// Follows `client.apiKey.file`.
///
/// When the key holds a non-empty path, the referenced properties file is
/// loaded as a required file and `client.apiKey.file` is removed afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadApiKeyFromConfig;

impl LoadApiKeyFromConfig {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigStrategy for LoadApiKeyFromConfig {
    fn name(&self) -> &'static str {
        "LoadApiKeyFromConfig"
    }

    fn process(&self, config: Configuration) -> ConfigurationResult<Configuration> {
        let Some(file) = config
            .get_str(API_KEY_FILE_PATH)
            .filter(|file| !file.is_empty())
            .map(str::to_owned)
        else {
            return Ok(config);
        };

        debug!("Loading API key file referenced by {}: {}", API_KEY_FILE_PATH, file);
        let mut config = LoadApiKeyConfig::new(&file, true).process(config)?;
        config.remove_path(API_KEY_FILE_PATH);
        Ok(config)
    }
}
