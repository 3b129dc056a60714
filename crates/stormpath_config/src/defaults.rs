//! The standard loader composition.
//!
//! [`default_loader`] wires the usual source order for an SDK client:
//!
//! 1. the default configuration (a required file, or the built-in defaults)
//! 2. `~/.stormpath/apiKey.properties`, `~/.stormpath/stormpath.json`,
//!    `~/.stormpath/stormpath.yaml`
//! 3. `apiKey.properties`, `stormpath.json`, `stormpath.yaml` in the
//!    application directory
//! 4. `STORMPATH_*` environment variables
//! 5. the configuration passed to the client constructor
//!
//! Later sources override earlier ones. [`with_remote`] adds the remote
//! enrichment steps in front of validation.

use crate::configuration::Configuration;
use crate::environment::{Environment, ProcessEnvironment};
use crate::helpers::home_dir;
use crate::loader::ConfigLoader;
use crate::remote::ClientFactory;
use crate::strategies::{
    EnrichClientFromRemoteConfig, EnrichIntegrationConfig, EnrichIntegrationFromRemoteConfig,
    ExtendConfig, LoadApiKeyConfig, LoadApiKeyFromConfig, LoadEnvConfig, LoadFileConfig,
    MoveApiKeyToClientApiKey, ValidateClientConfig,
};
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;

/// Prefix of the environment variables consulted by [`default_loader`].
pub const DEFAULT_ENV_PREFIX: &str = "STORMPATH";

/// Per-user configuration files, relative to the home directory.
const HOME_API_KEY_FILE: &str = "~/.stormpath/apiKey.properties";
const HOME_JSON_FILE: &str = "~/.stormpath/stormpath.json";
const HOME_YAML_FILE: &str = "~/.stormpath/stormpath.yaml";

/// Per-application configuration files, relative to the application directory.
const APP_API_KEY_FILE: &str = "apiKey.properties";
const APP_JSON_FILE: &str = "stormpath.json";
const APP_YAML_FILE: &str = "stormpath.yaml";

/// Settings used when no default configuration file is given.
///
/// Every key the environment loader may override must exist here, since
/// environment variables only replace existing leaves.
pub fn builtin_defaults() -> Configuration {
    Configuration::try_from(json!({
        "client": {
            "apiKey": {"file": null, "id": null, "secret": null},
            "cacheManager": {"defaultTtl": 300, "defaultTti": 300, "caches": {}},
            "baseUrl": "https://api.stormpath.com/v1",
            "connectionTimeout": 30,
            "authenticationScheme": "SAUTHC1",
            "proxy": {"port": null, "host": null, "username": null, "password": null}
        },
        "application": {"name": null, "href": null},
        "skipRemoteConfig": false,
        "website": false,
        "api": false
    }))
    .unwrap_or_default()
}

/// Inputs of [`default_loader`].
#[derive(Clone)]
pub struct StormpathConfigOptions {
    /// Required default configuration file. `None` uses [`builtin_defaults`].
    pub default_config_path: Option<PathBuf>,
    /// Home directory for the `~/.stormpath` files. `None` skips them.
    pub home_dir: Option<PathBuf>,
    /// Directory holding the per-application files.
    pub app_dir: PathBuf,
    pub env_prefix: String,
    /// Variable name redirects, see [`LoadEnvConfig::with_aliases`].
    pub env_aliases: HashMap<String, String>,
    /// Configuration passed to the client constructor; always wins.
    pub client_config: Configuration,
    pub environment: Arc<dyn Environment>,
}

impl StormpathConfigOptions {
    pub fn new() -> Self {
        Self {
            default_config_path: None,
            home_dir: home_dir(),
            app_dir: PathBuf::from("."),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            env_aliases: HashMap::new(),
            client_config: Configuration::new(),
            environment: Arc::new(ProcessEnvironment),
        }
    }

    pub fn with_default_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_config_path = Some(path.into());
        self
    }

    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = home_dir;
        self
    }

    pub fn with_app_dir(mut self, app_dir: impl Into<PathBuf>) -> Self {
        self.app_dir = app_dir.into();
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn with_env_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.env_aliases.insert(from.into(), to.into());
        self
    }

    pub fn with_client_config(mut self, client_config: Configuration) -> Self {
        self.client_config = client_config;
        self
    }

    pub fn with_environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = environment;
        self
    }
}

impl Default for StormpathConfigOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StormpathConfigOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StormpathConfigOptions")
            .field("default_config_path", &self.default_config_path)
            .field("home_dir", &self.home_dir)
            .field("app_dir", &self.app_dir)
            .field("env_prefix", &self.env_prefix)
            .field("env_aliases", &self.env_aliases)
            .field("client_config", &self.client_config)
            .finish_non_exhaustive()
    }
}

/// Builds the standard local-only loader.
///
/// # Examples
///
/// ```no_run
/// use stormpath_config::defaults::{default_loader, StormpathConfigOptions};
///
/// let loader = default_loader(&StormpathConfigOptions::new().with_app_dir("/srv/app"));
/// let config = loader.load()?;
/// println!("{:?}", config.get_str("application.href"));
/// # Ok::<(), stormpath_config::ConfigurationError>(())
/// ```
pub fn default_loader(options: &StormpathConfigOptions) -> ConfigLoader {
    let home = options.home_dir.clone();
    let app_file = |name: &str| options.app_dir.join(name);

    let defaults = match &options.default_config_path {
        Some(path) => ConfigLoader::default().with_load_strategy(LoadFileConfig::new(path, true)),
        None => ConfigLoader::default().with_load_strategy(ExtendConfig::new(builtin_defaults())),
    };

    defaults
        .with_load_strategy(LoadApiKeyConfig::with_home_dir(
            HOME_API_KEY_FILE,
            false,
            home.clone(),
        ))
        .with_load_strategy(LoadFileConfig::with_home_dir(HOME_JSON_FILE, false, home.clone()))
        .with_load_strategy(LoadFileConfig::with_home_dir(HOME_YAML_FILE, false, home))
        .with_load_strategy(LoadApiKeyConfig::new(app_file(APP_API_KEY_FILE), false))
        .with_load_strategy(LoadFileConfig::new(app_file(APP_JSON_FILE), false))
        .with_load_strategy(LoadFileConfig::new(app_file(APP_YAML_FILE), false))
        .with_load_strategy(
            LoadEnvConfig::new(options.env_prefix.clone())
                .with_aliases(options.env_aliases.clone())
                .with_environment(Arc::clone(&options.environment)),
        )
        .with_load_strategy(ExtendConfig::new(options.client_config.clone()))
        .with_post_processing_strategy(LoadApiKeyFromConfig::new())
        .with_post_processing_strategy(MoveApiKeyToClientApiKey::new())
        .with_validation_strategy(ValidateClientConfig::new())
}

/// Adds remote application resolution and integration enrichment to
/// `loader`, ahead of its existing validation strategies.
pub fn with_remote(
    mut loader: ConfigLoader,
    options: &StormpathConfigOptions,
    factory: Arc<dyn ClientFactory>,
) -> ConfigLoader {
    loader.insert_validation_strategy(0, EnrichClientFromRemoteConfig::new(Arc::clone(&factory)));
    loader.insert_validation_strategy(1, EnrichIntegrationConfig::new(options.client_config.clone()));
    loader.insert_validation_strategy(2, EnrichIntegrationFromRemoteConfig::new(factory));
    loader
}
