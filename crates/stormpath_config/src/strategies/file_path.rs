//! Path handling shared by the file-based strategies.

use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::helpers::{expand_home, expand_home_with};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A configuration file location plus its "must exist" policy.
///
/// `~` is expanded once, at construction time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FilePath {
    raw: String,
    expanded: Option<PathBuf>,
    must_exist: bool,
}

impl FilePath {
    pub(crate) fn new(path: &Path, must_exist: bool) -> Self {
        let raw = path.to_string_lossy().into_owned();
        let expanded = expand_home(&raw);
        Self {
            raw,
            expanded,
            must_exist,
        }
    }

    pub(crate) fn with_home(path: &Path, must_exist: bool, home: Option<PathBuf>) -> Self {
        let raw = path.to_string_lossy().into_owned();
        let expanded = expand_home_with(&raw, home);
        Self {
            raw,
            expanded,
            must_exist,
        }
    }

    pub(crate) fn must_exist(&self) -> bool {
        self.must_exist
    }

    /// The path as shown in messages: expanded when possible.
    pub(crate) fn display(&self) -> String {
        match &self.expanded {
            Some(path) => path.display().to_string(),
            None => self.raw.clone(),
        }
    }

    /// Returns the path to read, or `None` when an optional file is absent.
    ///
    /// # Errors
    ///
    /// For required files only:
    /// - `ConfigurationError::HomeNotSet` when `~` cannot be expanded
    /// - `ConfigurationError::FileNotFound` when the file does not exist
    pub(crate) fn resolve(&self) -> ConfigurationResult<Option<&Path>> {
        let Some(path) = self.expanded.as_deref() else {
            if self.must_exist {
                return Err(ConfigurationError::HomeNotSet {
                    path: self.raw.clone(),
                });
            }
            debug!("Skipping {}: home directory is not available", self.raw);
            return Ok(None);
        };

        if !path.exists() {
            if self.must_exist {
                return Err(ConfigurationError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            debug!("Skipping optional configuration file {}", path.display());
            return Ok(None);
        }

        Ok(Some(path))
    }
}
