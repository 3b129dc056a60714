//! Relocates a top-level `apiKey` mapping to `client.apiKey`.

use crate::configuration::Configuration;
use crate::errors::ConfigurationResult;
use crate::strategy::ConfigStrategy;
use serde_json::Value;
use tracing::debug;

#[cfg(test)]
#[path = "move_api_key_tests.rs"]
mod tests;

/// Moves a non-empty top-level `apiKey` mapping to `client.apiKey`.
///
/// The move replaces `client.apiKey` wholesale (no merge) and deletes the
/// top-level key. Other keys under `client` are preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveApiKeyToClientApiKey;

impl MoveApiKeyToClientApiKey {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigStrategy for MoveApiKeyToClientApiKey {
    fn name(&self) -> &'static str {
        "MoveApiKeyToClientApiKey"
    }

    fn process(&self, mut config: Configuration) -> ConfigurationResult<Configuration> {
        let movable = matches!(config.get("apiKey"), Some(Value::Object(map)) if !map.is_empty());
        if !movable {
            return Ok(config);
        }

        if let Some(api_key) = config.as_map_mut().remove("apiKey") {
            debug!("Moving top-level apiKey to client.apiKey");
            config.set_path("client.apiKey", api_key);
        }
        Ok(config)
    }
}
