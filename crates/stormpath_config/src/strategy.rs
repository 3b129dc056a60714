//! The strategy abstraction.
//!
//! A strategy is one named transformation step of a loader pipeline. It takes
//! ownership of the configuration built so far and returns the next one.

use crate::configuration::Configuration;
use crate::errors::ConfigurationResult;

/// One step of a [`crate::ConfigLoader`] pipeline.
///
/// Strategies carry only construction-time parameters (a path, a prefix, a
/// literal overlay, a client factory...) and keep no mutable state between
/// invocations, which is why they are required to be `Send + Sync`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use stormpath_config::{ConfigStrategy, Configuration, ConfigurationResult};
///
/// struct EnableCaching;
///
/// impl ConfigStrategy for EnableCaching {
///     fn name(&self) -> &'static str {
///         "EnableCaching"
///     }
///
///     fn process(&self, mut config: Configuration) -> ConfigurationResult<Configuration> {
///         config.set_path("client.cacheManager.enabled", json!(true));
///         Ok(config)
///     }
/// }
///
/// let config = EnableCaching.process(Configuration::new())?;
/// assert!(config.is_truthy("client.cacheManager.enabled"));
/// # Ok::<(), stormpath_config::ConfigurationError>(())
/// ```
pub trait ConfigStrategy: Send + Sync {
    /// Short, stable name used in log output.
    fn name(&self) -> &'static str;

    /// Transforms `config` into the next configuration.
    ///
    /// # Errors
    ///
    /// Any error aborts the surrounding pipeline.
    fn process(&self, config: Configuration) -> ConfigurationResult<Configuration>;
}

impl<S: ConfigStrategy + ?Sized> ConfigStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn process(&self, config: Configuration) -> ConfigurationResult<Configuration> {
        (**self).process(config)
    }
}
