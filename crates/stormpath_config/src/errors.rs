//! Configuration loading error types.
//!
//! Domain-specific errors for loading configuration files, reading
//! credentials, resolving remote settings and validating the merged
//! result.
//!
//! Every error is fatal for the pipeline that raised it: the loader stops at
//! the first failing strategy and hands the error back unchanged. Messages
//! always name the offending path, href or application name.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Configuration system errors.
///
/// These errors occur when loading, parsing, enriching or validating
/// configuration from the sources of a [`crate::ConfigLoader`] pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Config file \"{path}\" doesn't exist.")]
    FileNotFound { path: String },

    #[error("Unable to load \"{path}\". Environment home not set.")]
    HomeNotSet { path: String },

    #[error("Failed to access configuration file: {path} - {reason}")]
    FileAccessError { path: String, reason: String },

    #[error("Error parsing file {path}.\nDetails: {reason}")]
    ParseError { path: String, reason: String },

    #[error("Unable to read properties file: {path}")]
    IncompleteCredentials { path: String },

    #[error(
        "The provided application could not be found. The provided application href was: \"{href}\"."
    )]
    ApplicationNotFoundByHref { href: String },

    #[error(
        "The provided application could not be found. The provided application name was: \"{name}\"."
    )]
    ApplicationNotFoundByName { name: String },

    #[error(
        "Exception was raised while trying to resolve an application. The provided application {lookup} was: \"{value}\". Exception message was: \"{reason}\"."
    )]
    ApplicationResolutionFailed {
        lookup: String,
        value: String,
        reason: String,
    },

    #[error(
        "Could not automatically resolve a Stormpath Application. Please specify your Stormpath Application in your configuration."
    )]
    DefaultApplicationUnresolvable,

    #[error("Unable to resolve a Stormpath application: {href} - {reason}")]
    RemoteEnrichmentFailed { href: String, reason: String },

    #[error("Failed to create remote client: {reason}")]
    ClientCreationFailed { reason: String },

    #[error("Invalid configuration: {field} - {reason}")]
    ValidationFailed { field: String, reason: String },
}

impl ConfigurationError {
    /// Returns `true` for errors raised while talking to the remote service.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ConfigurationError::ApplicationNotFoundByHref { .. }
                | ConfigurationError::ApplicationNotFoundByName { .. }
                | ConfigurationError::ApplicationResolutionFailed { .. }
                | ConfigurationError::DefaultApplicationUnresolvable
                | ConfigurationError::RemoteEnrichmentFailed { .. }
                | ConfigurationError::ClientCreationFailed { .. }
        )
    }
}

/// Result type alias for configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

/// Errors reported by a [`crate::RemoteClient`] implementation.
///
/// The remote strategies only distinguish "not found" from every other
/// failure, so implementations should map their transport errors onto these
/// variants rather than inventing new ones.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemoteError {
    #[error("Resource not found: {href}")]
    NotFound { href: String },

    #[error("Request failed with HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request failed: {message}")]
    Transport { message: String },
}

impl RemoteError {
    /// Returns `true` when the remote service reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            RemoteError::NotFound { .. } => true,
            RemoteError::Status { status, .. } => *status == 404,
            RemoteError::Transport { .. } => false,
        }
    }
}
