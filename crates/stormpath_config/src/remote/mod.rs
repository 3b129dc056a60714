//! Remote service interface.
//!
//! The remote enrichment strategies consult the service that owns
//! application, directory and policy settings. This module only defines the
//! interface; callers inject an implementation through a [`ClientFactory`].
//!
//! # Responsibilities
//!
//! - Fetch an application by href
//! - Query applications by exact name
//! - Enumerate all applications of the tenant
//!
//! All calls are synchronous and return or fail immediately. No retries
//! happen at this layer.

use crate::configuration::Configuration;
use crate::errors::{ConfigurationResult, RemoteError};
use std::sync::Arc;

pub mod models;

pub use models::{
    AccountCreationPolicy, AccountStore, AccountStoreMapping, Application, Directory,
    EmailStatus, Group, OAuthPolicy, PasswordPolicy, PasswordStrength, Provider,
};

/// Client for the remote configuration authority.
///
/// Implementations must be `Send + Sync` so a loader holding a factory can be
/// shared across threads.
pub trait RemoteClient: Send + Sync {
    /// Fetch a single application.
    ///
    /// # Errors
    ///
    /// Implementations report a missing application with
    /// [`RemoteError::NotFound`] (or a 404 [`RemoteError::Status`]).
    fn get_application(&self, href: &str) -> Result<Application, RemoteError>;

    /// Return the applications whose name matches `name` exactly.
    ///
    /// An empty vector means no match; it is not an error.
    fn query_applications_by_name(&self, name: &str) -> Result<Vec<Application>, RemoteError>;

    /// Return every application visible to the client.
    fn list_applications(&self) -> Result<Vec<Application>, RemoteError>;
}

/// Creates a [`RemoteClient`] from the configuration loaded so far.
///
/// The factory receives the current tree so it can pick up credentials
/// (`client.apiKey`) and the base URL (`client.baseUrl`).
///
/// Any `Fn(&Configuration) -> ConfigurationResult<Arc<dyn RemoteClient>>`
/// closure is a factory.
pub trait ClientFactory: Send + Sync {
    fn create_client(&self, config: &Configuration) -> ConfigurationResult<Arc<dyn RemoteClient>>;
}

impl<F> ClientFactory for F
where
    F: Fn(&Configuration) -> ConfigurationResult<Arc<dyn RemoteClient>> + Send + Sync,
{
    fn create_client(&self, config: &Configuration) -> ConfigurationResult<Arc<dyn RemoteClient>> {
        self(config)
    }
}

/// Factory that hands out the same pre-built client for every configuration.
#[derive(Clone)]
pub struct StaticClientFactory {
    client: Arc<dyn RemoteClient>,
}

impl StaticClientFactory {
    pub fn new(client: Arc<dyn RemoteClient>) -> Self {
        Self { client }
    }
}

impl ClientFactory for StaticClientFactory {
    fn create_client(&self, _config: &Configuration) -> ConfigurationResult<Arc<dyn RemoteClient>> {
        Ok(Arc::clone(&self.client))
    }
}

impl std::fmt::Debug for StaticClientFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticClientFactory").finish_non_exhaustive()
    }
}
