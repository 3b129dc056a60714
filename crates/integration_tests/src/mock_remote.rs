//! In-memory implementation of the remote service.

use std::sync::Mutex;
use stormpath_config::remote::{Application, RemoteClient};
use stormpath_config::RemoteError;

/// Remote client serving a fixed set of applications.
///
/// Every call is recorded so scenarios can assert whether the remote
/// service was consulted at all.
#[derive(Debug, Default)]
pub struct InMemoryRemoteClient {
    applications: Vec<Application>,
    failure: Option<RemoteError>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryRemoteClient {
    pub fn new(applications: Vec<Application>) -> Self {
        Self {
            applications,
            ..Self::default()
        }
    }

    /// Fails every call with `error`.
    pub fn failing(error: RemoteError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// The calls made so far, as `"<method> <argument>"` strings.
    pub fn calls(&self) -> Vec<String> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn record(&self, call: String) -> Result<(), RemoteError> {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(call),
            Err(poisoned) => poisoned.into_inner().push(call),
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl RemoteClient for InMemoryRemoteClient {
    fn get_application(&self, href: &str) -> Result<Application, RemoteError> {
        self.record(format!("get_application {href}"))?;
        self.applications
            .iter()
            .find(|application| application.href == href)
            .cloned()
            .ok_or_else(|| RemoteError::Status {
                status: 404,
                message: format!("The requested resource does not exist: {href}"),
            })
    }

    fn query_applications_by_name(&self, name: &str) -> Result<Vec<Application>, RemoteError> {
        self.record(format!("query_applications_by_name {name}"))?;
        Ok(self
            .applications
            .iter()
            .filter(|application| application.name == name)
            .cloned()
            .collect())
    }

    fn list_applications(&self) -> Result<Vec<Application>, RemoteError> {
        self.record("list_applications".to_string())?;
        Ok(self.applications.clone())
    }
}
