//! Test fixtures for integration tests.
//!
//! This module provides the configuration assets used across loader
//! scenarios and the remote applications served by
//! [`crate::mock_remote::InMemoryRemoteClient`]. Fixtures ensure consistent
//! test data across multiple test cases.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use stormpath_config::remote::models::{
    AccountCreationPolicy, AccountStore, AccountStoreMapping, Application, Directory,
    EmailStatus, OAuthPolicy, PasswordPolicy, PasswordStrength, Provider,
};
use tempfile::TempDir;

/// Configuration file assets.
pub mod assets {
    /// Baseline settings every scenario starts from.
    pub const DEFAULT_CONFIG_YML: &str = "\
client:
  apiKey:
    file: null
    id: null
    secret: null
  cacheManager:
    defaultTtl: 300
    defaultTti: 300
    caches: {}
  baseUrl: https://api.stormpath.com/v1
  connectionTimeout: 30
  authenticationScheme: SAUTHC1
application:
  name: null
  href: null
";

    pub const API_KEY_PROPERTIES: &str =
        "apiKey.id = API_KEY_PROPERTIES_ID\napiKey.secret = API_KEY_PROPERTIES_SECRET\n";

    pub const EMPTY_API_KEY_PROPERTIES: &str = "# no credentials yet\n";

    pub const STORMPATH_YML: &str = "\
client:
  cacheManager:
    defaultTtl: 301
application:
  name: MY_APP
";

    pub const STORMPATH_JSON: &str = r#"{
    "client": {
        "apiKey": {
            "id": "MY_JSON_CONFIG_API_KEY_ID",
            "secret": "MY_JSON_CONFIG_API_KEY_SECRET"
        },
        "cacheManager": {"defaultTtl": 302}
    },
    "application": {"name": "MY_JSON_APP"}
}"#;

    /// Points `client.apiKey.file` at `apiKey.properties`; the placeholder
    /// `{dir}` is replaced with the asset directory.
    pub const API_KEY_FILE_YML_TEMPLATE: &str = "\
client:
  apiKey:
    file: {dir}/apiKey.properties
";

    pub const API_KEY_API_KEY_JSON: &str = r#"{
    "apiKey": {"id": "API_KEY_JSON_ID", "secret": "API_KEY_JSON_SECRET"}
}"#;
}

/// A temporary directory holding the standard configuration assets.
///
/// The directory is deleted when the value is dropped.
pub struct TestAssets {
    dir: TempDir,
}

impl TestAssets {
    /// Writes every asset from [`assets`] into a fresh temporary directory.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create asset directory")?;
        let test_assets = Self { dir };

        test_assets.write("default_config.yml", assets::DEFAULT_CONFIG_YML)?;
        test_assets.write("apiKey.properties", assets::API_KEY_PROPERTIES)?;
        test_assets.write("empty_apiKey.properties", assets::EMPTY_API_KEY_PROPERTIES)?;
        test_assets.write("stormpath.yml", assets::STORMPATH_YML)?;
        test_assets.write("stormpath.json", assets::STORMPATH_JSON)?;
        test_assets.write("apiKeyApiKey.json", assets::API_KEY_API_KEY_JSON)?;
        let api_key_file_yml = assets::API_KEY_FILE_YML_TEMPLATE
            .replace("{dir}", &test_assets.root().to_string_lossy());
        test_assets.write("apiKeyFile.yml", &api_key_file_yml)?;

        Ok(test_assets)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of an asset; the file need not exist.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes (or overwrites) an asset, creating parent directories.
    pub fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

/// Remote applications served by the in-memory client.
pub mod applications {
    use super::*;

    pub const ADMIN_HREF: &str = "https://api.stormpath.com/v1/applications/admin";
    pub const MY_APPLICATION_NAME: &str = "My Application";
    pub const MY_APPLICATION_HREF: &str = "https://api.stormpath.com/v1/applications/my-app";
    pub const OTHER_APPLICATION_HREF: &str = "https://api.stormpath.com/v1/applications/other";

    /// The built-in administrative application present in every tenant.
    pub fn admin() -> Application {
        Application::new("Stormpath", ADMIN_HREF)
    }

    /// A fully configured application: OAuth policy, Facebook and Google
    /// login directories, and a default cloud directory with policies.
    pub fn my_application() -> Application {
        let facebook = Directory::new(
            "Facebook",
            "https://api.stormpath.com/v1/directories/facebook",
        )
        .with_provider(
            Provider::new("facebook", "https://api.stormpath.com/v1/providers/facebook")
                .with_attribute("client_id", "FACEBOOK_APP_ID")
                .with_attribute("client_secret", "FACEBOOK_APP_SECRET"),
        );
        let google = Directory::new("Google", "https://api.stormpath.com/v1/directories/google")
            .with_provider(
                Provider::new("google", "https://api.stormpath.com/v1/providers/google")
                    .with_attribute("client_id", "GOOGLE_CLIENT_ID")
                    .with_attribute("redirect_uri", "https://example.com/callbacks/google"),
            );
        let cloud = Directory::new("Users", "https://api.stormpath.com/v1/directories/users")
            .with_provider(Provider::new(
                "stormpath",
                "https://api.stormpath.com/v1/providers/users",
            ))
            .with_password_policy(PasswordPolicy {
                reset_email_status: EmailStatus::Enabled,
                strength: PasswordStrength {
                    href: "https://api.stormpath.com/v1/passwordStrength/users".to_string(),
                    min_length: 8,
                    max_length: 100,
                    min_lower_case: 1,
                    min_upper_case: 1,
                    min_numeric: 1,
                    min_symbol: 0,
                    min_diacritic: 0,
                    attributes: Default::default(),
                },
            })
            .with_account_creation_policy(AccountCreationPolicy {
                verification_email_status: EmailStatus::Enabled,
            });

        Application::new(MY_APPLICATION_NAME, MY_APPLICATION_HREF)
            .with_oauth_policy(OAuthPolicy::new(
                "https://api.stormpath.com/v1/oAuthPolicies/my-app",
                Duration::from_secs(3600),
                Duration::from_secs(5_184_000),
            ))
            .with_account_store_mapping(AccountStoreMapping::new(AccountStore::Directory(
                cloud.clone(),
            )))
            .with_account_store_mapping(AccountStoreMapping::new(AccountStore::Directory(
                facebook,
            )))
            .with_account_store_mapping(AccountStoreMapping::new(AccountStore::Directory(google)))
            .with_default_account_store_mapping(AccountStoreMapping::new(
                AccountStore::Directory(cloud),
            ))
    }

    /// A second, bare application; makes default resolution ambiguous.
    pub fn other_application() -> Application {
        Application::new("Other Application", OTHER_APPLICATION_HREF).with_oauth_policy(
            OAuthPolicy::new(
                "https://api.stormpath.com/v1/oAuthPolicies/other",
                Duration::from_secs(60),
                Duration::from_secs(120),
            ),
        )
    }
}
