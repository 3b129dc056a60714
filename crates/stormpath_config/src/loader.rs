//! Pipeline orchestration.
//!
//! A [`ConfigLoader`] owns three ordered lists of strategies and threads a
//! single [`Configuration`] through them:
//!
//! 1. every load strategy, each followed by every post-processing strategy
//! 2. every validation strategy, once, on the final tree
//!
//! Running post-processing after each load step lets later sources see
//! normalized keys (e.g. `client.apiKey` after a top-level `apiKey` has been
//! moved) while still allowing a later source to override them.
//!
//! The first error aborts the run and is returned unchanged.

use crate::configuration::Configuration;
use crate::errors::ConfigurationResult;
use crate::strategy::ConfigStrategy;
use tracing::{debug, info, instrument, warn};

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

/// Ordered strategy pipeline producing a validated [`Configuration`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use stormpath_config::strategies::{ExtendConfig, ValidateClientConfig};
/// use stormpath_config::{ConfigLoader, Configuration};
///
/// let literal = Configuration::from_value(json!({
///     "client": {"apiKey": {"id": "ID", "secret": "SECRET"}},
///     "application": {"name": "My app"}
/// }))
/// .unwrap();
///
/// let loader = ConfigLoader::new(
///     vec![Box::new(ExtendConfig::new(literal))],
///     Vec::new(),
///     vec![Box::new(ValidateClientConfig::new())],
/// );
///
/// let config = loader.load()?;
/// assert_eq!(config.get_str("application.name"), Some("My app"));
/// # Ok::<(), stormpath_config::ConfigurationError>(())
/// ```
#[derive(Default)]
pub struct ConfigLoader {
    load_strategies: Vec<Box<dyn ConfigStrategy>>,
    post_processing_strategies: Vec<Box<dyn ConfigStrategy>>,
    validation_strategies: Vec<Box<dyn ConfigStrategy>>,
}

impl ConfigLoader {
    pub fn new(
        load_strategies: Vec<Box<dyn ConfigStrategy>>,
        post_processing_strategies: Vec<Box<dyn ConfigStrategy>>,
        validation_strategies: Vec<Box<dyn ConfigStrategy>>,
    ) -> Self {
        Self {
            load_strategies,
            post_processing_strategies,
            validation_strategies,
        }
    }

    /// Appends a load strategy.
    pub fn with_load_strategy(mut self, strategy: impl ConfigStrategy + 'static) -> Self {
        self.load_strategies.push(Box::new(strategy));
        self
    }

    /// Appends a post-processing strategy.
    pub fn with_post_processing_strategy(
        mut self,
        strategy: impl ConfigStrategy + 'static,
    ) -> Self {
        self.post_processing_strategies.push(Box::new(strategy));
        self
    }

    /// Appends a validation strategy.
    pub fn with_validation_strategy(mut self, strategy: impl ConfigStrategy + 'static) -> Self {
        self.validation_strategies.push(Box::new(strategy));
        self
    }

    /// Inserts a validation strategy at `index`, shifting later ones back.
    ///
    /// `index` is clamped to the number of validation strategies.
    pub fn insert_validation_strategy(
        &mut self,
        index: usize,
        strategy: impl ConfigStrategy + 'static,
    ) {
        let index = index.min(self.validation_strategies.len());
        self.validation_strategies.insert(index, Box::new(strategy));
    }

    pub fn load_strategy_names(&self) -> Vec<&'static str> {
        names(&self.load_strategies)
    }

    pub fn post_processing_strategy_names(&self) -> Vec<&'static str> {
        names(&self.post_processing_strategies)
    }

    pub fn validation_strategy_names(&self) -> Vec<&'static str> {
        names(&self.validation_strategies)
    }

    /// Runs the pipeline starting from an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any strategy.
    pub fn load(&self) -> ConfigurationResult<Configuration> {
        self.load_from(Configuration::new())
    }

    /// Runs the pipeline starting from `initial`.
    #[instrument(
        skip(self, initial),
        fields(
            load = self.load_strategies.len(),
            post_processing = self.post_processing_strategies.len(),
            validation = self.validation_strategies.len()
        )
    )]
    pub fn load_from(&self, initial: Configuration) -> ConfigurationResult<Configuration> {
        info!("Starting configuration load");
        let mut config = initial;

        for strategy in &self.load_strategies {
            config = apply("load", strategy.as_ref(), config)?;
            for post in &self.post_processing_strategies {
                config = apply("post-processing", post.as_ref(), config)?;
            }
        }

        debug!("Validating configuration");
        for strategy in &self.validation_strategies {
            config = apply("validation", strategy.as_ref(), config)?;
        }

        info!("Configuration loaded with {} top-level keys", config.as_map().len());
        Ok(config)
    }
}

fn names(strategies: &[Box<dyn ConfigStrategy>]) -> Vec<&'static str> {
    strategies.iter().map(|s| s.name()).collect()
}

fn apply(
    phase: &str,
    strategy: &dyn ConfigStrategy,
    config: Configuration,
) -> ConfigurationResult<Configuration> {
    debug!("Applying {} strategy {}", phase, strategy.name());
    strategy.process(config).map_err(|e| {
        warn!("{} strategy {} failed: {}", phase, strategy.name(), e);
        e
    })
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("load_strategies", &self.load_strategy_names())
            .field(
                "post_processing_strategies",
                &self.post_processing_strategy_names(),
            )
            .field("validation_strategies", &self.validation_strategy_names())
            .finish()
    }
}
