//! Read-only views of remote resources.
//!
//! These are plain data-transfer structs filled in by a
//! [`crate::RemoteClient`] implementation. The enrichment strategies only
//! project them into configuration fields; nothing here is ever written back.
//!
//! Attribute maps (`attributes`) hold additional resource properties under
//! their snake_case remote names. Projections camelCase them.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::time::Duration;

/// Name of the built-in administrative application present in every tenant.
pub const RESERVED_APPLICATION_NAME: &str = "Stormpath";

/// Provider ids of directories that are not social login providers.
pub const INTERNAL_PROVIDER_IDS: [&str; 3] = ["stormpath", "ad", "ldap"];

/// An application registered with the remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub name: String,
    pub href: String,
    pub account_store_mappings: Vec<AccountStoreMapping>,
    pub oauth_policy: Option<OAuthPolicy>,
    pub default_account_store_mapping: Option<AccountStoreMapping>,
}

impl Application {
    /// Creates an application with no policies or account stores.
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            account_store_mappings: Vec::new(),
            oauth_policy: None,
            default_account_store_mapping: None,
        }
    }

    pub fn with_oauth_policy(mut self, policy: OAuthPolicy) -> Self {
        self.oauth_policy = Some(policy);
        self
    }

    pub fn with_account_store_mapping(mut self, mapping: AccountStoreMapping) -> Self {
        self.account_store_mappings.push(mapping);
        self
    }

    pub fn with_default_account_store_mapping(mut self, mapping: AccountStoreMapping) -> Self {
        self.default_account_store_mapping = Some(mapping);
        self
    }

    /// Returns the directory behind the default account store, if any.
    ///
    /// When the default account store is a group, its owning directory is
    /// returned.
    pub fn default_directory(&self) -> Option<&Directory> {
        self.default_account_store_mapping
            .as_ref()
            .map(|mapping| mapping.account_store.directory())
    }
}

/// Link between an application and one of its account stores.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountStoreMapping {
    pub account_store: AccountStore,
}

impl AccountStoreMapping {
    pub fn new(account_store: AccountStore) -> Self {
        Self { account_store }
    }
}

/// A place where accounts live: a directory, or a group inside one.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountStore {
    Directory(Directory),
    Group(Group),
}

impl AccountStore {
    /// The directory itself, or the directory that owns the group.
    pub fn directory(&self) -> &Directory {
        match self {
            AccountStore::Directory(directory) => directory,
            AccountStore::Group(group) => &group.directory,
        }
    }

    /// The login provider, for directories only. Groups never report one.
    pub fn provider(&self) -> Option<&Provider> {
        match self {
            AccountStore::Directory(directory) => directory.provider.as_ref(),
            AccountStore::Group(_) => None,
        }
    }
}

/// A directory of accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    pub name: String,
    pub href: String,
    pub provider: Option<Provider>,
    pub password_policy: Option<PasswordPolicy>,
    pub account_creation_policy: Option<AccountCreationPolicy>,
}

impl Directory {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            provider: None,
            password_policy: None,
            account_creation_policy: None,
        }
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.password_policy = Some(policy);
        self
    }

    pub fn with_account_creation_policy(mut self, policy: AccountCreationPolicy) -> Self {
        self.account_creation_policy = Some(policy);
        self
    }
}

/// A group of accounts within a directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub href: String,
    pub directory: Directory,
}

/// The identity provider backing a directory (e.g. `google`, `facebook`,
/// or the internal `stormpath`).
#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    pub provider_id: String,
    pub href: String,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    /// Provider-specific settings such as `client_id` or `redirect_uri`.
    pub attributes: Map<String, Value>,
}

impl Provider {
    pub fn new(provider_id: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            href: href.into(),
            created_at: None,
            modified_at: None,
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the audit timestamps reported by the remote service. They are
    /// never projected into the configuration.
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, modified_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self.modified_at = Some(modified_at);
        self
    }

    /// Social providers are every provider except the internal ones.
    pub fn is_social(&self) -> bool {
        !INTERNAL_PROVIDER_IDS.contains(&self.provider_id.as_str())
    }
}

/// OAuth token settings of an application.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthPolicy {
    pub href: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub attributes: Map<String, Value>,
}

impl OAuthPolicy {
    pub fn new(
        href: impl Into<String>,
        access_token_ttl: Duration,
        refresh_token_ttl: Duration,
    ) -> Self {
        Self {
            href: href.into(),
            access_token_ttl,
            refresh_token_ttl,
            created_at: None,
            modified_at: None,
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the audit timestamps reported by the remote service. They are
    /// never projected into the configuration.
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, modified_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self.modified_at = Some(modified_at);
        self
    }
}

/// Whether a directory workflow email is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailStatus {
    Enabled,
    Disabled,
}

impl EmailStatus {
    pub fn is_enabled(self) -> bool {
        self == EmailStatus::Enabled
    }
}

/// Password reset and strength settings of a directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordPolicy {
    pub reset_email_status: EmailStatus,
    pub strength: PasswordStrength,
}

/// Password composition rules of a directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordStrength {
    pub href: String,
    pub min_length: u32,
    pub max_length: u32,
    pub min_lower_case: u32,
    pub min_upper_case: u32,
    pub min_numeric: u32,
    pub min_symbol: u32,
    pub min_diacritic: u32,
    pub attributes: Map<String, Value>,
}

/// Account registration settings of a directory.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountCreationPolicy {
    pub verification_email_status: EmailStatus,
}
