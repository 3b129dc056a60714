//! Tests for ValidateClientConfig.

use super::*;
use crate::test_support::config;
use serde_json::json;

fn valid() -> serde_json::Value {
    json!({
        "client": {"apiKey": {"id": "ID", "secret": "SECRET"}},
        "application": {"name": "App", "href": "https://api.stormpath.com/v1/applications/a"}
    })
}

fn failure(value: serde_json::Value) -> (String, String) {
    match ValidateClientConfig::new().process(config(value)) {
        Err(ConfigurationError::ValidationFailed { field, reason }) => (field, reason),
        other => panic!("Expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn test_valid_configuration_passes_unchanged() {
    let input = config(valid());

    let output = ValidateClientConfig::new()
        .process(input.clone())
        .expect("valid");

    assert_eq!(output, input);
}

#[test]
fn test_empty_configuration_fails() {
    let (_, reason) = failure(json!({}));
    assert_eq!(reason, "Configuration not instantiated.");
}

#[test]
fn test_empty_client_fails() {
    let (field, reason) = failure(json!({"client": {}, "application": {}}));
    assert_eq!(field, "client");
    assert_eq!(reason, "Client cannot be empty.");
}

#[test]
fn test_missing_api_key_fails() {
    let (field, reason) = failure(json!({"client": {"baseUrl": "https://api"}, "application": {"name": "a"}}));
    assert_eq!(field, "client.apiKey");
    assert_eq!(reason, "API key cannot be empty.");
}

#[test]
fn test_api_key_without_secret_fails() {
    let (_, reason) = failure(json!({
        "client": {"apiKey": {"id": "ID", "secret": null}},
        "application": {"name": "a"}
    }));
    assert_eq!(reason, "API key ID and secret is required.");
}

#[test]
fn test_missing_application_fails() {
    let (field, _) = failure(json!({"client": {"apiKey": {"id": "ID", "secret": "S"}}}));
    assert_eq!(field, "application");
}

#[test]
fn test_invalid_application_href_fails() {
    let mut value = valid();
    value["application"]["href"] = json!("https://api.stormpath.com/v1/directories/d");

    let (field, reason) = failure(value);

    assert_eq!(field, "application.href");
    assert!(reason.contains("https://api.stormpath.com/v1/directories/d"));
}

#[test]
fn test_null_application_href_is_allowed() {
    let mut value = valid();
    value["application"]["href"] = json!(null);

    assert!(ValidateClientConfig::new().process(config(value)).is_ok());
}

#[test]
fn test_spa_enabled_without_view_fails() {
    let mut value = valid();
    value["web"] = json!({"spa": {"enabled": true, "view": null}});

    let (field, reason) = failure(value);

    assert_eq!(field, "web.spa.view");
    assert!(reason.starts_with("SPA mode is enabled"));
}

#[test]
fn test_spa_with_view_or_disabled_passes() {
    let mut with_view = valid();
    with_view["web"] = json!({"spa": {"enabled": true, "view": "/srv/index.html"}});
    let mut disabled = valid();
    disabled["web"] = json!({"spa": {"enabled": false}});

    assert!(ValidateClientConfig::new().process(config(with_view)).is_ok());
    assert!(ValidateClientConfig::new().process(config(disabled)).is_ok());
}
