//! Environment variable access.
//!
//! [`crate::strategies::LoadEnvConfig`] reads variables through the
//! [`Environment`] trait so callers can substitute a fixed set of variables
//! (for example in tests) instead of the real process environment.

use std::collections::{BTreeMap, HashMap};
use std::env;

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;

/// Read-only view of environment variables.
pub trait Environment: Send + Sync {
    /// Returns the value of `name`, or `None` when it is unset or not valid
    /// Unicode.
    fn get(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}
