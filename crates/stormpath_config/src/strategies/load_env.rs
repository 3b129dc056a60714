//! Overrides configuration leaves from environment variables.

use crate::configuration::Configuration;
use crate::environment::{Environment, ProcessEnvironment};
use crate::errors::ConfigurationResult;
use crate::strategy::ConfigStrategy;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

#[cfg(test)]
#[path = "load_env_tests.rs"]
mod tests;

/// Overrides every existing leaf of the configuration from the environment.
///
/// For a leaf at `client.cacheManager.defaultTtl` and prefix `STORMPATH` the
/// variable `STORMPATH_CLIENT_CACHEMANAGER_DEFAULTTTL` is consulted, unless
/// the alias map redirects that name to another variable. Only keys that
/// already exist can be overridden; unset or empty variables are ignored.
///
/// Values are written as strings, except when the existing leaf is an
/// integer: then the variable is parsed as an integer. A variable that does
/// not parse is kept as a string.
///
/// Boolean leaves are not parsed: `STORMPATH_SKIPREMOTECONFIG=false` writes
/// the string `"false"`, which is truthy. Unset a switch to turn it off.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use stormpath_config::strategies::LoadEnvConfig;
/// use stormpath_config::{ConfigStrategy, Configuration};
///
/// let mut env = HashMap::new();
/// env.insert("FOO_CLIENT_APIKEY_ID".to_string(), "B".to_string());
///
/// let strategy = LoadEnvConfig::new("FOO").with_environment(Arc::new(env));
/// let config = Configuration::from_value(json!({"client": {"apiKey": {"id": "A"}}})).unwrap();
///
/// let config = strategy.process(config)?;
/// assert_eq!(config.get_str("client.apiKey.id"), Some("B"));
/// # Ok::<(), stormpath_config::ConfigurationError>(())
/// ```
#[derive(Clone)]
pub struct LoadEnvConfig {
    prefix: String,
    aliases: HashMap<String, String>,
    environment: Arc<dyn Environment>,
}

impl LoadEnvConfig {
    /// Creates the strategy reading the process environment.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            aliases: HashMap::new(),
            environment: Arc::new(ProcessEnvironment),
        }
    }

    /// Redirects synthesized variable names to alternate names.
    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases = aliases
            .into_iter()
            .map(|(from, to)| (from.into(), to.into()))
            .collect();
        self
    }

    /// Replaces the environment the strategy reads from.
    pub fn with_environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = environment;
        self
    }

    /// The variable consulted for a key path, after alias resolution.
    pub fn variable_name(&self, path: &[String]) -> String {
        let synthesized = format!("{}_{}", self.prefix, path.join("_").to_uppercase());
        match self.aliases.get(&synthesized) {
            Some(alias) => alias.clone(),
            None => synthesized,
        }
    }

    fn override_leaves(&self, map: &mut Map<String, Value>, path: &mut Vec<String>) {
        for (key, value) in map.iter_mut() {
            path.push(key.clone());
            match value {
                Value::Object(child) => self.override_leaves(child, path),
                leaf => {
                    let name = self.variable_name(path);
                    if let Some(raw) = self.environment.get(&name).filter(|v| !v.is_empty()) {
                        debug!("Overriding {} from environment variable {}", path.join("."), name);
                        *leaf = coerce(leaf, raw, &name);
                    }
                }
            }
            path.pop();
        }
    }
}

impl ConfigStrategy for LoadEnvConfig {
    fn name(&self) -> &'static str {
        "LoadEnvConfig"
    }

    fn process(&self, config: Configuration) -> ConfigurationResult<Configuration> {
        let mut map = config.into_map();
        self.override_leaves(&mut map, &mut Vec::new());
        Ok(Configuration::from(map))
    }
}

impl std::fmt::Debug for LoadEnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadEnvConfig")
            .field("prefix", &self.prefix)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

/// Integer leaves stay integers; everything else becomes a string.
fn coerce(current: &Value, raw: String, variable: &str) -> Value {
    let is_integer = matches!(current, Value::Number(n) if n.is_i64() || n.is_u64());
    if !is_integer {
        return Value::String(raw);
    }

    match raw.trim().parse::<i64>() {
        Ok(number) => Value::from(number),
        Err(_) => {
            warn!(
                "Environment variable {} is not an integer, keeping it as a string",
                variable
            );
            Value::String(raw)
        }
    }
}
