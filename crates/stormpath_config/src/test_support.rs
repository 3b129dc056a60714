//! Shared fixtures for unit tests.

use crate::configuration::Configuration;
use crate::errors::RemoteError;
use crate::logging::LogSink;
use crate::remote::models::{
    AccountCreationPolicy, AccountStore, AccountStoreMapping, Application, Directory,
    EmailStatus, OAuthPolicy, PasswordPolicy, PasswordStrength, Provider,
    RESERVED_APPLICATION_NAME,
};
use crate::remote::RemoteClient;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

pub(crate) const NAMED_APPLICATION_HREF: &str = "https://api.stormpath.com/v1/applications/a";
pub(crate) const ADMIN_APPLICATION_HREF: &str = "https://api.stormpath.com/v1/applications/admin";

/// Builds a configuration from a `json!` object literal.
pub(crate) fn config(value: Value) -> Configuration {
    Configuration::from_value(value).expect("fixture must be a JSON object")
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub(crate) fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create fixture directory");
    }
    std::fs::write(&path, content).expect("write fixture file");
    path
}

/// The built-in administrative application.
pub(crate) fn admin_application() -> Application {
    Application::new(RESERVED_APPLICATION_NAME, ADMIN_APPLICATION_HREF)
}

fn timestamp(text: &str) -> DateTime<Utc> {
    text.parse().expect("fixture timestamp must be RFC 3339")
}

/// An application with an OAuth policy, a Google directory and a default
/// Stormpath directory carrying password and account creation policies.
pub(crate) fn named_application() -> Application {
    let google = Directory::new("Google", "https://api.stormpath.com/v1/directories/google")
        .with_provider(
            Provider::new("google", "https://api.stormpath.com/v1/providers/google")
                .with_attribute("client_id", "GOOGLE_CLIENT_ID")
                .with_attribute("redirect_uri", "https://example.com/callbacks/google")
                .with_timestamps(
                    timestamp("2016-01-01T00:00:00Z"),
                    timestamp("2016-02-01T00:00:00Z"),
                ),
        );

    let mut strength_attributes = Map::new();
    strength_attributes.insert("prevent_reuse".to_string(), Value::from(0));
    let cloud = Directory::new("Cloud", "https://api.stormpath.com/v1/directories/cloud")
        .with_provider(Provider::new(
            "stormpath",
            "https://api.stormpath.com/v1/providers/cloud",
        ))
        .with_password_policy(PasswordPolicy {
            reset_email_status: EmailStatus::Enabled,
            strength: PasswordStrength {
                href: "https://api.stormpath.com/v1/strength/cloud".to_string(),
                min_length: 8,
                max_length: 100,
                min_lower_case: 1,
                min_upper_case: 1,
                min_numeric: 1,
                min_symbol: 0,
                min_diacritic: 0,
                attributes: strength_attributes,
            },
        })
        .with_account_creation_policy(AccountCreationPolicy {
            verification_email_status: EmailStatus::Disabled,
        });

    Application::new("My named application", NAMED_APPLICATION_HREF)
        .with_oauth_policy(
            OAuthPolicy::new(
                "https://api.stormpath.com/v1/oAuthPolicies/a",
                Duration::from_secs(3600),
                Duration::from_secs(5_184_000),
            )
            .with_attribute("token_endpoint", "/oauth/token")
            .with_attribute("created_at", "2016-01-01T00:00:00.000Z")
            .with_timestamps(
                timestamp("2016-01-01T00:00:00Z"),
                timestamp("2016-03-01T00:00:00Z"),
            ),
        )
        .with_account_store_mapping(AccountStoreMapping::new(AccountStore::Directory(google)))
        .with_account_store_mapping(AccountStoreMapping::new(AccountStore::Directory(
            cloud.clone(),
        )))
        .with_default_account_store_mapping(AccountStoreMapping::new(AccountStore::Directory(
            cloud,
        )))
}

/// In-memory remote client.
#[derive(Debug, Default)]
pub(crate) struct MockClient {
    applications: Vec<Application>,
    failure: Option<RemoteError>,
}

impl MockClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A tenant holding the admin application and [`named_application`].
    pub(crate) fn with_fixtures() -> Self {
        Self::new()
            .with_application(admin_application())
            .with_application(named_application())
    }

    pub(crate) fn with_application(mut self, application: Application) -> Self {
        self.applications.retain(|a| a.href != application.href);
        self.applications.push(application);
        self
    }

    /// Makes every call fail with `error`.
    pub(crate) fn failing(mut self, error: RemoteError) -> Self {
        self.failure = Some(error);
        self
    }

    fn check(&self) -> Result<(), RemoteError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl RemoteClient for MockClient {
    fn get_application(&self, href: &str) -> Result<Application, RemoteError> {
        self.check()?;
        self.applications
            .iter()
            .find(|a| a.href == href)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound {
                href: href.to_string(),
            })
    }

    fn query_applications_by_name(&self, name: &str) -> Result<Vec<Application>, RemoteError> {
        self.check()?;
        Ok(self
            .applications
            .iter()
            .filter(|a| a.name == name)
            .cloned()
            .collect())
    }

    fn list_applications(&self) -> Result<Vec<Application>, RemoteError> {
        self.check()?;
        Ok(self.applications.clone())
    }
}

/// Log sink that records every message.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    messages: Mutex<Vec<(Option<String>, String)>>,
}

impl RecordingSink {
    pub(crate) fn messages(&self) -> Vec<(Option<String>, String)> {
        self.messages.lock().expect("sink lock").clone()
    }
}

impl LogSink for RecordingSink {
    fn debug(&self, logger: Option<&str>, message: &str) {
        self.messages
            .lock()
            .expect("sink lock")
            .push((logger.map(str::to_owned), message.to_string()));
    }
}
