//! Tests for EnrichClientFromRemoteConfig.

use super::*;
use crate::errors::RemoteError;
use crate::remote::StaticClientFactory;
use crate::test_support::{config, MockClient, NAMED_APPLICATION_HREF};
use serde_json::json;

fn strategy(client: MockClient) -> EnrichClientFromRemoteConfig {
    EnrichClientFromRemoteConfig::new(Arc::new(StaticClientFactory::new(Arc::new(client))))
}

#[test]
fn test_resolves_name_from_href() {
    let input = config(json!({
        "client": {"apiKey": {"id": "ID", "secret": "S"}},
        "application": {"href": NAMED_APPLICATION_HREF, "name": null}
    }));

    let result = strategy(MockClient::with_fixtures())
        .process(input)
        .expect("process");

    assert_eq!(result.get_str("application.name"), Some("My named application"));
    assert_eq!(result.get_str("application.href"), Some(NAMED_APPLICATION_HREF));
}

#[test]
fn test_resolves_href_from_name() {
    let input = config(json!({"application": {"name": "My named application"}}));

    let result = strategy(MockClient::with_fixtures())
        .process(input)
        .expect("process");

    assert_eq!(result.get_str("application.href"), Some(NAMED_APPLICATION_HREF));
}

#[test]
fn test_default_application_with_single_candidate() {
    let input = config(json!({"application": {"name": null, "href": null}}));

    let result = strategy(MockClient::with_fixtures())
        .process(input)
        .expect("process");

    assert_eq!(
        result.get_path("application"),
        Some(&json!({"name": "My named application", "href": NAMED_APPLICATION_HREF}))
    );
}

#[test]
fn test_default_application_is_ambiguous() {
    let client = MockClient::with_fixtures().with_application(Application::new(
        "Another application",
        "https://api.stormpath.com/v1/applications/b",
    ));

    let result = strategy(client).process(Configuration::new());

    assert_eq!(result, Err(ConfigurationError::DefaultApplicationUnresolvable));
}

#[test]
fn test_default_application_without_candidates() {
    let client = MockClient::new().with_application(Application::new(
        RESERVED_APPLICATION_NAME,
        "https://api.stormpath.com/v1/applications/admin",
    ));

    let result = strategy(client).process(Configuration::new());

    assert_eq!(result, Err(ConfigurationError::DefaultApplicationUnresolvable));
}

#[test]
fn test_unknown_href_is_not_found() {
    let href = "https://api.stormpath.com/v1/applications/missing";
    let input = config(json!({"application": {"href": href}}));

    let result = strategy(MockClient::with_fixtures()).process(input);

    assert_eq!(
        result,
        Err(ConfigurationError::ApplicationNotFoundByHref {
            href: href.to_string()
        })
    );
}

#[test]
fn test_unknown_name_is_not_found() {
    let input = config(json!({"application": {"name": "Nope"}}));

    let result = strategy(MockClient::with_fixtures()).process(input);

    assert_eq!(
        result,
        Err(ConfigurationError::ApplicationNotFoundByName {
            name: "Nope".to_string()
        })
    );
}

#[test]
fn test_transport_failure_is_wrapped() {
    let client = MockClient::with_fixtures().failing(RemoteError::Transport {
        message: "connection reset".to_string(),
    });
    let input = config(json!({"application": {"name": "My named application"}}));

    let result = strategy(client).process(input);

    match result {
        Err(ConfigurationError::ApplicationResolutionFailed { lookup, value, reason }) => {
            assert_eq!(lookup, "name");
            assert_eq!(value, "My named application");
            assert!(reason.contains("connection reset"));
        }
        other => panic!("Expected ApplicationResolutionFailed, got {other:?}"),
    }
}

#[test]
fn test_server_error_on_href_is_not_reported_as_missing() {
    let client = MockClient::with_fixtures().failing(RemoteError::Status {
        status: 500,
        message: "boom".to_string(),
    });
    let input = config(json!({"application": {"href": NAMED_APPLICATION_HREF}}));

    let result = strategy(client).process(input);

    assert!(matches!(
        result,
        Err(ConfigurationError::ApplicationResolutionFailed { ref lookup, .. }) if lookup == "href"
    ));
}

#[test]
fn test_skip_remote_config_is_passthrough() {
    let input = config(json!({"skipRemoteConfig": true, "application": {"name": "Nope"}}));

    let result = strategy(MockClient::new())
        .process(input.clone())
        .expect("process");

    assert_eq!(result, input);
}

#[test]
fn test_client_factory_failure_propagates() {
    let factory = |_: &Configuration| -> ConfigurationResult<Arc<dyn RemoteClient>> {
        Err(ConfigurationError::ClientCreationFailed {
            reason: "missing credentials".to_string(),
        })
    };

    let result = EnrichClientFromRemoteConfig::new(Arc::new(factory)).process(Configuration::new());

    assert!(matches!(
        result,
        Err(ConfigurationError::ClientCreationFailed { .. })
    ));
}
