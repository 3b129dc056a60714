//! Dumps the configuration to a log sink.

use crate::configuration::Configuration;
use crate::errors::ConfigurationResult;
use crate::logging::{LogSink, TracingLogSink};
use crate::strategy::ConfigStrategy;
use std::sync::Arc;
use tracing::warn;

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;

/// Writes the configuration built so far to a log sink at debug level.
///
/// The message is the optional `"<section>:\n"` header followed by the
/// configuration as JSON (sorted keys, four-space indentation) and a
/// trailing newline. The configuration passes through unchanged.
///
/// # Examples
///
/// ```
/// use stormpath_config::strategies::DebugConfig;
/// use stormpath_config::{ConfigStrategy, Configuration};
///
/// let strategy = DebugConfig::new().with_section("after defaults");
/// let config = strategy.process(Configuration::new())?;
/// assert!(config.is_empty());
/// # Ok::<(), stormpath_config::ConfigurationError>(())
/// ```
#[derive(Clone)]
pub struct DebugConfig {
    logger: Option<String>,
    section: Option<String>,
    sink: Arc<dyn LogSink>,
}

impl DebugConfig {
    /// Creates the strategy writing to the default `tracing` sink.
    pub fn new() -> Self {
        Self {
            logger: None,
            section: None,
            sink: Arc::new(TracingLogSink),
        }
    }

    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.logger = Some(logger.into());
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Renders the message that [`ConfigStrategy::process`] logs.
    pub fn render(&self, config: &Configuration) -> serde_json::Result<String> {
        let body = config.to_pretty_string()?;
        Ok(match &self.section {
            Some(section) => format!("{section}:\n{body}\n"),
            None => format!("{body}\n"),
        })
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStrategy for DebugConfig {
    fn name(&self) -> &'static str {
        "DebugConfig"
    }

    fn process(&self, config: Configuration) -> ConfigurationResult<Configuration> {
        match self.render(&config) {
            Ok(message) => self.sink.debug(self.logger.as_deref(), &message),
            Err(e) => warn!("Unable to render configuration for debugging: {}", e),
        }
        Ok(config)
    }
}

impl std::fmt::Debug for DebugConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugConfig")
            .field("logger", &self.logger)
            .field("section", &self.section)
            .finish_non_exhaustive()
    }
}
