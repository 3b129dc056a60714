//! Final validation gate of a loader pipeline.

use crate::configuration::Configuration;
use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::strategy::ConfigStrategy;
use serde_json::Value;

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;

/// Enforces the structural invariants of a usable client configuration.
///
/// Checks run in a fixed order and the first violation is reported:
///
/// 1. the configuration is not empty
/// 2. `client` is present and non-empty
/// 3. `client.apiKey` is present and non-empty
/// 4. `client.apiKey.id` and `client.apiKey.secret` are both set
/// 5. `application` is present and non-empty
/// 6. `application.href`, when set, points at an application resource
/// 7. `web.spa.view` is set whenever `web.spa.enabled` is true
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateClientConfig;

impl ValidateClientConfig {
    pub fn new() -> Self {
        Self
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigurationError {
    ConfigurationError::ValidationFailed {
        field: field.to_string(),
        reason: reason.into(),
    }
}

impl ConfigStrategy for ValidateClientConfig {
    fn name(&self) -> &'static str {
        "ValidateClientConfig"
    }

    fn process(&self, config: Configuration) -> ConfigurationResult<Configuration> {
        if config.is_empty() {
            return Err(invalid("", "Configuration not instantiated."));
        }

        if !config.is_truthy("client") {
            return Err(invalid("client", "Client cannot be empty."));
        }

        if !config.is_truthy("client.apiKey") {
            return Err(invalid("client.apiKey", "API key cannot be empty."));
        }

        if !config.is_truthy("client.apiKey.id") || !config.is_truthy("client.apiKey.secret") {
            return Err(invalid(
                "client.apiKey",
                "API key ID and secret is required.",
            ));
        }

        if !config.is_truthy("application") {
            return Err(invalid("application", "Application cannot be empty."));
        }

        if config.is_truthy("application.href") {
            let href = match config.get_path("application.href") {
                Some(Value::String(href)) => href.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            };
            if !href.contains("/applications/") {
                return Err(invalid(
                    "application.href",
                    format!("Application HREF {href} is not a valid Stormpath Application HREF."),
                ));
            }
        }

        if config.is_truthy("web.spa")
            && config.is_truthy("web.spa.enabled")
            && config
                .get_path("web.spa.view")
                .map_or(true, Value::is_null)
        {
            return Err(invalid(
                "web.spa.view",
                "SPA mode is enabled but stormpath.web.spa.view isn't set. This needs to be the absolute path to the file that you want to serve as your SPA entry.",
            ));
        }

        Ok(config)
    }
}
