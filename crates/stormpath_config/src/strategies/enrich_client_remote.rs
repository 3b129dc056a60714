//! Resolves the target application against the remote service.

use crate::configuration::Configuration;
use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::remote::models::{Application, RESERVED_APPLICATION_NAME};
use crate::remote::{ClientFactory, RemoteClient};
use crate::strategy::ConfigStrategy;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(test)]
#[path = "enrich_client_remote_tests.rs"]
mod tests;

/// Completes `application.href` and `application.name` from the remote
/// service.
///
/// Resolution order:
///
/// 1. `application.href` set: fetch it and record its name
/// 2. `application.name` set: query by name and record the first match's href
/// 3. neither: pick the only application other than the built-in
///    `"Stormpath"` one and record both fields
///
/// Nothing happens when `skipRemoteConfig` is truthy.
pub struct EnrichClientFromRemoteConfig {
    factory: Arc<dyn ClientFactory>,
}

impl EnrichClientFromRemoteConfig {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self { factory }
    }

    fn resolve_by_href(
        &self,
        client: &dyn RemoteClient,
        href: &str,
    ) -> ConfigurationResult<Application> {
        client.get_application(href).map_err(|e| {
            if e.is_not_found() {
                ConfigurationError::ApplicationNotFoundByHref {
                    href: href.to_string(),
                }
            } else {
                ConfigurationError::ApplicationResolutionFailed {
                    lookup: "href".to_string(),
                    value: href.to_string(),
                    reason: e.to_string(),
                }
            }
        })
    }

    fn resolve_by_name(
        &self,
        client: &dyn RemoteClient,
        name: &str,
    ) -> ConfigurationResult<Application> {
        let matches = client.query_applications_by_name(name).map_err(|e| {
            ConfigurationError::ApplicationResolutionFailed {
                lookup: "name".to_string(),
                value: name.to_string(),
                reason: e.to_string(),
            }
        })?;

        matches
            .into_iter()
            .next()
            .ok_or_else(|| ConfigurationError::ApplicationNotFoundByName {
                name: name.to_string(),
            })
    }

    fn resolve_default(&self, client: &dyn RemoteClient) -> ConfigurationResult<Application> {
        let applications = client
            .list_applications()
            .map_err(|_| ConfigurationError::DefaultApplicationUnresolvable)?;

        let mut candidates = applications
            .into_iter()
            .filter(|application| application.name != RESERVED_APPLICATION_NAME);

        match (candidates.next(), candidates.next()) {
            (Some(application), None) => Ok(application),
            _ => Err(ConfigurationError::DefaultApplicationUnresolvable),
        }
    }
}

/// The string form of a truthy leaf, or `None` when the leaf is falsy.
fn truthy_string(config: &Configuration, path: &str) -> Option<String> {
    if !config.is_truthy(path) {
        return None;
    }
    config.get_path(path).map(|value| match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

impl ConfigStrategy for EnrichClientFromRemoteConfig {
    fn name(&self) -> &'static str {
        "EnrichClientFromRemoteConfig"
    }

    fn process(&self, mut config: Configuration) -> ConfigurationResult<Configuration> {
        if config.is_truthy("skipRemoteConfig") {
            debug!("skipRemoteConfig is set, not resolving the application remotely");
            return Ok(config);
        }

        let client = self.factory.create_client(&config)?;

        if let Some(href) = truthy_string(&config, "application.href") {
            let application = self.resolve_by_href(client.as_ref(), &href)?;
            info!("Resolved application '{}' from href {}", application.name, href);
            config.set_path("application.name", Value::String(application.name));
        } else if let Some(name) = truthy_string(&config, "application.name") {
            let application = self.resolve_by_name(client.as_ref(), &name)?;
            info!("Resolved application '{}' to {}", name, application.href);
            config.set_path("application.href", Value::String(application.href));
        } else {
            let application = self.resolve_default(client.as_ref())?;
            info!(
                "Using default application '{}' ({})",
                application.name, application.href
            );
            config.set_path("application.name", Value::String(application.name));
            config.set_path("application.href", Value::String(application.href));
        }

        Ok(config)
    }
}

impl std::fmt::Debug for EnrichClientFromRemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichClientFromRemoteConfig")
            .finish_non_exhaustive()
    }
}
