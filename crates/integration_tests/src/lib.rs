//! Integration testing library for stormpath_config.
//!
//! This library provides fixtures and helpers for exercising complete loader
//! pipelines: configuration assets written to temporary directories, an
//! in-memory remote service, and logging setup.

pub mod fixtures;
pub mod mock_remote;
pub mod utils;

// Re-export commonly used types for convenience
pub use fixtures::TestAssets;
pub use mock_remote::InMemoryRemoteClient;
pub use utils::{configuration, environment, init_test_logging};
