//! Layered configuration loading for Stormpath SDK clients.
//!
//! A configuration is assembled by a [`ConfigLoader`]: an ordered pipeline of
//! [`ConfigStrategy`] steps that each take the tree built so far and return
//! the next one. Sources (files, credential files, environment variables,
//! literal overlays) are deep-merged in order, so later sources win.
//! Post-processing steps normalize the tree after every source, and
//! validation steps (optionally preceded by remote enrichment) run once at
//! the end.
//!
//! Most callers use [`defaults::default_loader`], which wires the standard
//! source order, and [`defaults::with_remote`] to resolve the application
//! against the remote service.

pub mod configuration;
pub mod defaults;
pub mod environment;
pub mod errors;
pub mod helpers;
pub mod loader;
pub mod logging;
pub mod merge;
pub mod parsers;
pub mod remote;
pub mod strategies;
pub mod strategy;

#[cfg(test)]
mod test_support;

// Re-export for convenient access
pub use configuration::Configuration;
pub use defaults::{default_loader, with_remote, StormpathConfigOptions};
pub use environment::{Environment, ProcessEnvironment};
pub use errors::{ConfigurationError, ConfigurationResult, RemoteError};
pub use loader::ConfigLoader;
pub use logging::{LogSink, TracingLogSink};
pub use merge::deep_merge;
pub use remote::{ClientFactory, RemoteClient, StaticClientFactory};
pub use strategy::ConfigStrategy;
