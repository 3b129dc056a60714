//! Derives implicit web feature flags from the `website` and `api` switches.

use crate::configuration::Configuration;
use crate::errors::ConfigurationResult;
use crate::strategy::ConfigStrategy;
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;

#[cfg(test)]
#[path = "enrich_integration_tests.rs"]
mod tests;

/// Features turned on by `website: true`.
pub const WEBSITE_FEATURES: [&str; 4] = ["register", "login", "logout", "me"];

/// Features turned on by `api: true`.
pub const API_FEATURES: [&str; 1] = ["oauth2"];

/// Enables web features implied by the `website` and `api` switches.
///
/// A feature the user configured explicitly, i.e. whose `web.<feature>`
/// mapping in the raw user configuration has an `enabled` key, is left
/// alone even when that value is `false`. Every other implied feature gets
/// `web.<feature>.enabled = true`.
#[derive(Debug, Clone, Default)]
pub struct EnrichIntegrationConfig {
    user_config: Configuration,
}

impl EnrichIntegrationConfig {
    /// `user_config` is the configuration the user supplied, before merging.
    pub fn new(user_config: Configuration) -> Self {
        Self { user_config }
    }

    fn user_configured_features(&self) -> BTreeSet<&str> {
        self.user_config
            .get_map("web")
            .map(|web| {
                web.iter()
                    .filter(|(_, definition)| {
                        definition
                            .as_object()
                            .is_some_and(|definition| definition.contains_key("enabled"))
                    })
                    .map(|(feature, _)| feature.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl ConfigStrategy for EnrichIntegrationConfig {
    fn name(&self) -> &'static str {
        "EnrichIntegrationConfig"
    }

    fn process(&self, mut config: Configuration) -> ConfigurationResult<Configuration> {
        let mut features: BTreeSet<&str> = BTreeSet::new();
        if config.is_truthy("website") {
            features.extend(WEBSITE_FEATURES);
        }
        if config.is_truthy("api") {
            features.extend(API_FEATURES);
        }

        let configured = self.user_configured_features();
        let web: Map<String, Value> = features
            .difference(&configured)
            .map(|feature| (feature.to_string(), json!({"enabled": true})))
            .collect();

        let mut overlay = Configuration::new();
        overlay.set_path("web", Value::Object(web));
        config.merge(&overlay);
        Ok(config)
    }
}
