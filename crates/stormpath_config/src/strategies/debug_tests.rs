//! Tests for DebugConfig.

use super::*;
use crate::test_support::{config, RecordingSink};
use serde_json::json;

#[test]
fn test_debug_with_section() {
    let sink = Arc::new(RecordingSink::default());
    let strategy = DebugConfig::new().with_section("test").with_sink(sink.clone());

    let result = strategy
        .process(config(json!({"abc": "123"})))
        .expect("process");

    assert_eq!(result, config(json!({"abc": "123"})));
    assert_eq!(
        sink.messages(),
        vec![(None, "test:\n{\n    \"abc\": \"123\"\n}\n".to_string())]
    );
}

#[test]
fn test_debug_without_section() {
    let sink = Arc::new(RecordingSink::default());
    let strategy = DebugConfig::new().with_sink(sink.clone());

    strategy
        .process(config(json!({"abc": "123"})))
        .expect("process");

    assert_eq!(
        sink.messages(),
        vec![(None, "{\n    \"abc\": \"123\"\n}\n".to_string())]
    );
}

#[test]
fn test_debug_with_custom_logger() {
    let sink = Arc::new(RecordingSink::default());
    let strategy = DebugConfig::new()
        .with_logger("my.custom.logger")
        .with_section("sec")
        .with_sink(sink.clone());

    let result = strategy
        .process(config(json!({"abc": "123"})))
        .expect("process");

    assert_eq!(result, config(json!({"abc": "123"})));
    assert_eq!(
        sink.messages(),
        vec![(
            Some("my.custom.logger".to_string()),
            "sec:\n{\n    \"abc\": \"123\"\n}\n".to_string()
        )]
    );
}

#[test]
fn test_debug_with_default_sink_passes_through() {
    let input = config(json!({"client": {"apiKey": {"id": "x"}}}));

    let result = DebugConfig::default()
        .with_logger("stormpath")
        .process(input.clone())
        .expect("process");

    assert_eq!(result, input);
}

#[test]
fn test_render_sorts_nested_keys() {
    let rendered = DebugConfig::new()
        .render(&config(json!({"b": {"z": 1, "a": 2}, "a": true})))
        .expect("render");

    assert_eq!(
        rendered,
        "{\n    \"a\": true,\n    \"b\": {\n        \"a\": 2,\n        \"z\": 1\n    }\n}\n"
    );
}
