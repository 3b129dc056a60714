//! Projects remote application settings into the web integration tree.

use crate::configuration::Configuration;
use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::helpers::to_camel_case;
use crate::merge::deep_merge;
use crate::remote::models::{Application, Directory, OAuthPolicy, PasswordStrength, Provider};
use crate::remote::ClientFactory;
use crate::strategy::ConfigStrategy;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(test)]
#[path = "enrich_integration_remote_tests.rs"]
mod tests;

/// Fills web integration settings from the resolved application.
///
/// Requires `application.href`; usually runs after
/// [`super::EnrichClientFromRemoteConfig`]. The projection writes:
///
/// - `application.oAuthPolicy`: token TTLs in seconds plus policy attributes
/// - `web.social.<providerId>`: one entry per social login directory
/// - `web.forgotPassword`, `web.changePassword`, `web.verifyEmail`: enabled
///   flags from the default directory's workflow emails
/// - `passwordPolicy`: the default directory's strength rules
///
/// Nothing happens when `skipRemoteConfig` is truthy or no href is known.
pub struct EnrichIntegrationFromRemoteConfig {
    factory: Arc<dyn ClientFactory>,
}

impl EnrichIntegrationFromRemoteConfig {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self { factory }
    }
}

/// Copies `attributes` with camelCased keys, leaving out `excluded` names.
fn camel_case_attributes(attributes: &Map<String, Value>, excluded: &[&str]) -> Map<String, Value> {
    attributes
        .iter()
        .filter(|(name, _)| !excluded.contains(&name.as_str()))
        .map(|(name, value)| (to_camel_case(name), value.clone()))
        .collect()
}

fn oauth_policy_settings(policy: &OAuthPolicy) -> Value {
    let mut settings = camel_case_attributes(&policy.attributes, &["created_at", "modified_at"]);
    settings.insert("href".to_string(), Value::from(policy.href.clone()));
    settings.insert(
        "accessTokenTtl".to_string(),
        Value::from(policy.access_token_ttl.as_secs_f64()),
    );
    settings.insert(
        "refreshTokenTtl".to_string(),
        Value::from(policy.refresh_token_ttl.as_secs_f64()),
    );
    Value::Object(settings)
}

fn social_provider_settings(provider: &Provider, local: Option<&Value>) -> Value {
    let mut entry = match local {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    };
    entry
        .entry("uri")
        .or_insert_with(|| Value::from(format!("/callbacks/{}", provider.provider_id)));

    let mut remote =
        camel_case_attributes(&provider.attributes, &["href", "created_at", "modified_at"]);
    remote.insert("providerId".to_string(), Value::from(provider.provider_id.clone()));
    remote.insert("enabled".to_string(), Value::Bool(true));

    deep_merge(&mut entry, &remote);
    Value::Object(entry)
}

fn password_strength_settings(strength: &PasswordStrength) -> Value {
    let mut settings = camel_case_attributes(&strength.attributes, &["href"]);
    for (name, value) in [
        ("minLength", strength.min_length),
        ("maxLength", strength.max_length),
        ("minLowerCase", strength.min_lower_case),
        ("minUpperCase", strength.min_upper_case),
        ("minNumeric", strength.min_numeric),
        ("minSymbol", strength.min_symbol),
        ("minDiacritic", strength.min_diacritic),
    ] {
        settings.insert(name.to_string(), Value::from(value));
    }
    Value::Object(settings)
}

fn apply_social_providers(config: &mut Configuration, application: &Application) {
    let mut social = config.get_map("web.social").cloned().unwrap_or_default();

    for mapping in &application.account_store_mappings {
        let Some(provider) = mapping.account_store.provider() else {
            continue;
        };
        if !provider.is_social() {
            continue;
        }
        debug!("Enabling social provider {}", provider.provider_id);
        let settings = social_provider_settings(provider, social.get(&provider.provider_id));
        social.insert(provider.provider_id.clone(), settings);
    }

    config.set_path("web.social", Value::Object(social));
}

fn apply_default_directory(config: &mut Configuration, directory: &Directory) {
    if let Some(policy) = &directory.password_policy {
        let reset_enabled = Value::Bool(policy.reset_email_status.is_enabled());
        config.set_path("web.forgotPassword.enabled", reset_enabled.clone());
        config.set_path("web.changePassword.enabled", reset_enabled);
        config.set_path("passwordPolicy", password_strength_settings(&policy.strength));
    }

    if let Some(policy) = &directory.account_creation_policy {
        config.set_path(
            "web.verifyEmail.enabled",
            Value::Bool(policy.verification_email_status.is_enabled()),
        );
    }
}

impl ConfigStrategy for EnrichIntegrationFromRemoteConfig {
    fn name(&self) -> &'static str {
        "EnrichIntegrationFromRemoteConfig"
    }

    fn process(&self, mut config: Configuration) -> ConfigurationResult<Configuration> {
        if config.is_truthy("skipRemoteConfig") {
            debug!("skipRemoteConfig is set, not enriching integration settings");
            return Ok(config);
        }

        let Some(href) = config
            .get_str("application.href")
            .filter(|href| !href.is_empty())
            .map(str::to_owned)
        else {
            debug!("No application href, not enriching integration settings");
            return Ok(config);
        };

        let client = self.factory.create_client(&config)?;
        let application =
            client
                .get_application(&href)
                .map_err(|e| ConfigurationError::RemoteEnrichmentFailed {
                    href: href.clone(),
                    reason: e.to_string(),
                })?;

        let oauth_policy = application.oauth_policy.as_ref().ok_or_else(|| {
            ConfigurationError::RemoteEnrichmentFailed {
                href: href.clone(),
                reason: "application has no OAuth policy".to_string(),
            }
        })?;
        config.set_path("application.oAuthPolicy", oauth_policy_settings(oauth_policy));

        apply_social_providers(&mut config, &application);

        if let Some(directory) = application.default_directory() {
            apply_default_directory(&mut config, directory);
        }

        info!("Enriched integration settings from application {}", href);
        Ok(config)
    }
}

impl std::fmt::Debug for EnrichIntegrationFromRemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichIntegrationFromRemoteConfig")
            .finish_non_exhaustive()
    }
}
