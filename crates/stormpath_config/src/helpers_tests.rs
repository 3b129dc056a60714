//! Tests for shared helpers.

use super::*;
use serde_json::json;
use std::path::Path;

#[test]
fn test_to_camel_case_without_underscore() {
    assert_eq!(to_camel_case("href"), "href");
    assert_eq!(to_camel_case("alreadyCamel"), "alreadyCamel");
}

#[test]
fn test_to_camel_case_with_underscores() {
    assert_eq!(to_camel_case("provider_id"), "providerId");
    assert_eq!(to_camel_case("access_token_ttl"), "accessTokenTtl");
    assert_eq!(to_camel_case("min_diacritic"), "minDiacritic");
}

#[test]
fn test_to_camel_case_title_cases_tail_words() {
    assert_eq!(to_camel_case("client_ID"), "clientId");
    assert_eq!(to_camel_case("a_b2c"), "aB2C");
    assert_eq!(to_camel_case("double__underscore"), "doubleUnderscore");
}

#[test]
fn test_is_truthy_matches_value_kinds() {
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&json!(0.0)));
    assert!(!is_truthy(&json!("")));
    assert!(!is_truthy(&json!([])));
    assert!(!is_truthy(&json!({})));

    assert!(is_truthy(&json!(true)));
    assert!(is_truthy(&json!(-1)));
    assert!(is_truthy(&json!("0")));
    assert!(is_truthy(&json!([0])));
    assert!(is_truthy(&json!({"k": null})));
}

#[test]
fn test_expand_home_leaves_plain_paths() {
    assert_eq!(
        expand_home_with("config/stormpath.yml", None),
        Some(PathBuf::from("config/stormpath.yml"))
    );
}

#[test]
fn test_expand_home_joins_home_directory() {
    let home = PathBuf::from("/home/tester");

    assert_eq!(
        expand_home_with("~/.stormpath/apiKey.properties", Some(home.clone())),
        Some(Path::new("/home/tester").join(".stormpath/apiKey.properties"))
    );
    assert_eq!(expand_home_with("~", Some(home.clone())), Some(home));
}

#[test]
fn test_expand_home_without_home_is_none() {
    assert_eq!(expand_home_with("~/.stormpath/stormpath.yml", None), None);
}

#[test]
fn test_expand_home_rejects_user_form() {
    assert_eq!(
        expand_home_with("~someone/file", Some(PathBuf::from("/home/tester"))),
        None
    );
}

#[cfg(unix)]
#[test]
#[serial_test::serial]
fn test_home_dir_falls_back_to_user_database_when_home_unset() {
    let saved = std::env::var_os("HOME");
    std::env::remove_var("HOME");

    let home = home_dir();
    let expanded = expand_home("~/.stormpath/apiKey.properties");

    if let Some(value) = saved {
        std::env::set_var("HOME", value);
    }

    let home = home.expect("home directory should come from the user database");
    assert_eq!(expanded, Some(home.join(".stormpath/apiKey.properties")));
}
