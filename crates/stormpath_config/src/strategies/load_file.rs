//! Loads a YAML or JSON file into the configuration.

use super::file_path::FilePath;
use crate::configuration::Configuration;
use crate::errors::ConfigurationResult;
use crate::parsers::read_serialized_file;
use crate::strategy::ConfigStrategy;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(test)]
#[path = "load_file_tests.rs"]
mod tests;

/// Deep-merges the content of a YAML or JSON file into the configuration.
///
/// The format is detected from the content, not the extension. A missing
/// optional file leaves the configuration unchanged.
///
/// # Examples
///
/// ```no_run
/// use stormpath_config::strategies::LoadFileConfig;
/// use stormpath_config::{ConfigStrategy, Configuration};
///
/// let strategy = LoadFileConfig::new("~/.stormpath/stormpath.yaml", false);
/// let config = strategy.process(Configuration::new())?;
/// # Ok::<(), stormpath_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LoadFileConfig {
    path: FilePath,
}

impl LoadFileConfig {
    /// Creates the strategy. `~` is expanded against the current home
    /// directory.
    pub fn new(path: impl AsRef<Path>, must_exist: bool) -> Self {
        Self {
            path: FilePath::new(path.as_ref(), must_exist),
        }
    }

    /// Creates the strategy with an explicit home directory for `~` expansion.
    pub fn with_home_dir(path: impl AsRef<Path>, must_exist: bool, home: Option<PathBuf>) -> Self {
        Self {
            path: FilePath::with_home(path.as_ref(), must_exist, home),
        }
    }
}

impl ConfigStrategy for LoadFileConfig {
    fn name(&self) -> &'static str {
        "LoadFileConfig"
    }

    fn process(&self, mut config: Configuration) -> ConfigurationResult<Configuration> {
        let Some(path) = self.path.resolve()? else {
            return Ok(config);
        };

        let loaded = read_serialized_file(path)?;
        debug!(
            "Merging {} top-level keys from {}",
            loaded.as_map().len(),
            path.display()
        );
        config.merge(&loaded);
        Ok(config)
    }
}
