//! Built-in configuration strategies.
//!
//! Each strategy is one step of a [`crate::ConfigLoader`] pipeline:
//!
//! | Strategy | Purpose |
//! |---|---|
//! | [`LoadFileConfig`] | Merge a YAML/JSON file |
//! | [`LoadApiKeyConfig`] | Read API key credentials from a properties file |
//! | [`LoadEnvConfig`] | Override existing leaves from environment variables |
//! | [`ExtendConfig`] | Merge a literal overlay |
//! | [`LoadApiKeyFromConfig`] | Follow `client.apiKey.file` |
//! | [`MoveApiKeyToClientApiKey`] | Move a top-level `apiKey` under `client` |
//! | [`EnrichClientFromRemoteConfig`] | Resolve the application remotely |
//! | [`EnrichIntegrationConfig`] | Enable features implied by `website` / `api` |
//! | [`EnrichIntegrationFromRemoteConfig`] | Project remote policies into `web` |
//! | [`ValidateClientConfig`] | Reject unusable configurations |
//! | [`DebugConfig`] | Dump the configuration to a log sink |

mod debug;
mod enrich_client_remote;
mod enrich_integration;
mod enrich_integration_remote;
mod extend;
mod file_path;
mod load_api_key;
mod load_api_key_from_config;
mod load_env;
mod load_file;
mod move_api_key;
mod validate;

pub use debug::DebugConfig;
pub use enrich_client_remote::EnrichClientFromRemoteConfig;
pub use enrich_integration::{EnrichIntegrationConfig, API_FEATURES, WEBSITE_FEATURES};
pub use enrich_integration_remote::EnrichIntegrationFromRemoteConfig;
pub use extend::ExtendConfig;
pub use load_api_key::LoadApiKeyConfig;
pub use load_api_key_from_config::LoadApiKeyFromConfig;
pub use load_env::LoadEnvConfig;
pub use load_file::LoadFileConfig;
pub use move_api_key::MoveApiKeyToClientApiKey;
pub use validate::ValidateClientConfig;
