//! Utility functions for integration tests.

use anyhow::{anyhow, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use stormpath_config::{Configuration, Environment};

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;

/// Environment variable holding the log filter for test runs.
pub const LOG_FILTER_VARIABLE: &str = "STORMPATH_CONFIG_LOG";

/// Initialize logging for integration tests.
///
/// The filter is read from `STORMPATH_CONFIG_LOG` (e.g.
/// `stormpath_config=debug`) and defaults to `warn`. Safe to call from
/// every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env(LOG_FILTER_VARIABLE)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Builds an in-memory environment from name/value pairs.
pub fn environment(vars: &[(&str, &str)]) -> Arc<dyn Environment> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    Arc::new(vars)
}

/// Converts a `json!` object literal into a configuration.
pub fn configuration(value: Value) -> Result<Configuration> {
    Configuration::try_from(value)
        .map_err(|other| anyhow!("Expected a JSON object, got {}", other))
}
