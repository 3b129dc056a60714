//! Extends the configuration with a literal overlay.

use crate::configuration::Configuration;
use crate::errors::ConfigurationResult;
use crate::strategy::ConfigStrategy;

#[cfg(test)]
#[path = "extend_tests.rs"]
mod tests;

/// Deep-merges a fixed overlay, typically the configuration handed to the
/// SDK client constructor, into the configuration.
#[derive(Debug, Clone, Default)]
pub struct ExtendConfig {
    extend_with: Configuration,
}

impl ExtendConfig {
    pub fn new(extend_with: Configuration) -> Self {
        Self { extend_with }
    }
}

impl ConfigStrategy for ExtendConfig {
    fn name(&self) -> &'static str {
        "ExtendConfig"
    }

    fn process(&self, mut config: Configuration) -> ConfigurationResult<Configuration> {
        config.merge(&self.extend_with);
        Ok(config)
    }
}
