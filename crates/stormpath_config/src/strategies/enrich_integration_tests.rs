//! Tests for EnrichIntegrationConfig.

use super::*;
use crate::test_support::config;

#[test]
fn test_website_and_api_with_empty_user_config() {
    let input = config(json!({"website": true, "api": true, "client": {"k": "v"}}));

    let result = EnrichIntegrationConfig::new(Configuration::new())
        .process(input)
        .expect("process");

    assert_eq!(
        result.into_value(),
        json!({
            "website": true,
            "api": true,
            "client": {"k": "v"},
            "web": {
                "register": {"enabled": true},
                "login": {"enabled": true},
                "logout": {"enabled": true},
                "me": {"enabled": true},
                "oauth2": {"enabled": true}
            }
        })
    );
}

#[test]
fn test_user_config_with_empty_web() {
    let input = config(json!({"website": true, "client": {"k": "v"}}));

    let result = EnrichIntegrationConfig::new(config(json!({"web": {}})))
        .process(input)
        .expect("process");

    assert_eq!(
        result.into_value(),
        json!({
            "website": true,
            "client": {"k": "v"},
            "web": {
                "register": {"enabled": true},
                "login": {"enabled": true},
                "logout": {"enabled": true},
                "me": {"enabled": true}
            }
        })
    );
}

#[test]
fn test_user_configured_feature_is_excluded() {
    for enabled in [true, false] {
        let input = config(json!({"website": true, "client": {"k": "v"}}));
        let user = config(json!({"web": {"register": {"enabled": enabled}}}));

        let result = EnrichIntegrationConfig::new(user)
            .process(input)
            .expect("process");

        assert_eq!(
            result.into_value(),
            json!({
                "website": true,
                "client": {"k": "v"},
                "web": {
                    "login": {"enabled": true},
                    "logout": {"enabled": true},
                    "me": {"enabled": true}
                }
            })
        );
    }
}

#[test]
fn test_user_feature_without_enabled_key_is_still_enabled() {
    let input = config(json!({"api": true, "web": {"oauth2": {"uri": "/oauth/token"}}}));
    let user = config(json!({"web": {"oauth2": {"uri": "/oauth/token"}}}));

    let result = EnrichIntegrationConfig::new(user)
        .process(input)
        .expect("process");

    assert_eq!(
        result.get_path("web.oauth2"),
        Some(&json!({"uri": "/oauth/token", "enabled": true}))
    );
}

#[test]
fn test_no_switches_only_ensures_web() {
    let input = config(json!({"website": false, "web": {"login": {"enabled": false}}}));

    let result = EnrichIntegrationConfig::default()
        .process(input.clone())
        .expect("process");

    assert_eq!(result, input);
}
