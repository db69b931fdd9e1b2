//! Struct rendering tests

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn field_lines(output: &str, target: RenderTarget) -> usize {
    match target {
        RenderTarget::Go => output.lines().filter(|l| l.contains("`json:")).count(),
        RenderTarget::Rust => output
            .lines()
            .filter(|l| l.starts_with("    ") && !l.trim_start().starts_with('#'))
            .count(),
    }
}

// ============================================================================
// RenderTarget Tests
// ============================================================================

#[test_case("go", RenderTarget::Go ; "go")]
#[test_case("rust", RenderTarget::Rust ; "rust")]
#[test_case("Rust", RenderTarget::Rust ; "mixed case")]
#[test_case(" go ", RenderTarget::Go ; "surrounding whitespace")]
fn test_parse_target(input: &str, expected: RenderTarget) {
    assert_eq!(input.parse::<RenderTarget>().unwrap(), expected);
}

#[test_case("java" ; "java")]
#[test_case("" ; "empty")]
#[test_case("golang" ; "golang")]
fn test_parse_unknown_target(input: &str) {
    let err = input.parse::<RenderTarget>().unwrap_err();
    assert!(matches!(err, Error::UnsupportedTarget { target } if target == input));
}

#[test]
fn test_target_display_roundtrip() {
    for target in RenderTarget::ALL {
        assert_eq!(target.to_string().parse::<RenderTarget>().unwrap(), target);
    }
}

// ============================================================================
// Type Inference Tests
// ============================================================================

#[test_case(json!(true), "bool", "bool" ; "bool")]
#[test_case(json!(123), "float64", "f64" ; "integer")]
#[test_case(json!(123.45), "float64", "f64" ; "fraction")]
#[test_case(json!("x"), "string", "String" ; "string")]
#[test_case(json!([1, 2]), "[]interface{}", "Vec<serde_json::Value>" ; "array")]
#[test_case(json!({"a": 1}), "map[string]interface{}", "serde_json::Map<String, serde_json::Value>" ; "object")]
#[test_case(json!(null), "interface{}", "Option<serde_json::Value>" ; "null")]
fn test_type_mapping(value: serde_json::Value, go: &str, rust: &str) {
    let token = TypeToken::of(&value);
    assert_eq!(RenderTarget::Go.type_name(token), go);
    assert_eq!(RenderTarget::Rust.type_name(token), rust);
}

#[test]
fn test_integral_numbers_are_floats() {
    assert_eq!(TypeToken::of(&json!(0)), TypeToken::Float);
    assert_eq!(TypeToken::of(&json!(-7)), TypeToken::Float);
    assert_eq!(TypeToken::of(&json!(u64::MAX)), TypeToken::Float);
}

// ============================================================================
// Go Rendering Tests
// ============================================================================

#[test]
fn test_render_go_simple_object() {
    let value = json!({"name": "test", "value": 123});
    let output = SchemaRenderer::new(RenderTarget::Go).render(&value);

    assert_eq!(
        output,
        "type GeneratedStruct struct {\n    name string `json:\"name\"`\n    value float64 `json:\"value\"`\n}"
    );
}

#[test]
fn test_render_go_all_kinds() {
    let value = json!({
        "string_field": "test",
        "number_field": 123.45,
        "bool_field": true,
        "array_field": [1, 2, 3],
        "object_field": {"nested": "value"},
        "null_field": null
    });
    let output = SchemaRenderer::new(RenderTarget::Go).render(&value);

    assert!(output.starts_with("type GeneratedStruct struct {\n"));
    assert!(output.contains("string_field string"));
    assert!(output.contains("number_field float64"));
    assert!(output.contains("bool_field bool"));
    assert!(output.contains("array_field []interface{}"));
    assert!(output.contains("object_field map[string]interface{}"));
    assert!(output.contains("null_field interface{}"));
    assert!(!output.contains("nested"));
}

#[test]
fn test_render_go_non_object() {
    let output = SchemaRenderer::new(RenderTarget::Go).render(&json!([1, 2, 3]));
    assert_eq!(
        output,
        "type GeneratedStruct struct {\n    Data interface{} `json:\"data\"`\n}"
    );
}

// ============================================================================
// Rust Rendering Tests
// ============================================================================

#[test]
fn test_render_rust_simple_object() {
    let value = json!({"name": "test", "value": 123});
    let output = SchemaRenderer::new(RenderTarget::Rust).render(&value);

    assert_eq!(
        output,
        concat!(
            "#[derive(Debug, Serialize, Deserialize)]\n",
            "struct GeneratedStruct {\n",
            "    #[serde(rename = \"name\")]\n",
            "    name: String,\n",
            "    #[serde(rename = \"value\")]\n",
            "    value: f64,\n",
            "}"
        )
    );
}

#[test]
fn test_render_rust_non_object() {
    for value in [json!([1, 2, 3]), json!("text"), json!(null), json!(4)] {
        let output = SchemaRenderer::new(RenderTarget::Rust).render(&value);
        assert_eq!(
            output,
            "#[derive(Debug, Serialize, Deserialize)]\nstruct GeneratedStruct {\n    data: serde_json::Value,\n}"
        );
    }
}

#[test]
fn test_render_rust_empty_object() {
    let output = SchemaRenderer::new(RenderTarget::Rust).render(&json!({}));
    assert_eq!(
        output,
        "#[derive(Debug, Serialize, Deserialize)]\nstruct GeneratedStruct {\n}"
    );
}

// ============================================================================
// Renderer Behaviour
// ============================================================================

#[test_case(RenderTarget::Go)]
#[test_case(RenderTarget::Rust)]
fn test_one_field_line_per_key(target: RenderTarget) {
    let value = json!({"a": 1, "b": "x", "c": [1], "d": {"e": null}, "f": null});
    let output = SchemaRenderer::new(target).render(&value);
    assert_eq!(field_lines(&output, target), 5);
}

#[test_case(RenderTarget::Go)]
#[test_case(RenderTarget::Rust)]
fn test_render_is_deterministic(target: RenderTarget) {
    let value = json!({"zeta": 1, "alpha": true, "mid": {"x": 1}});
    let renderer = SchemaRenderer::new(target);
    assert_eq!(renderer.render(&value), renderer.render(&value));
}

#[test]
fn test_fields_follow_key_order() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{"zeta": 1, "alpha": true, "mid": "m"}"#).unwrap();
    let renderer = SchemaRenderer::new(RenderTarget::Go);
    let keys: Vec<&str> = renderer.fields(&value).iter().map(|f| f.key).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);

    let output = renderer.render(&value);
    let zeta = output.find("zeta").unwrap();
    let alpha = output.find("alpha").unwrap();
    let mid = output.find("mid").unwrap();
    assert!(zeta < alpha && alpha < mid);
}

#[test]
fn test_fields_of_non_object_is_empty() {
    let renderer = SchemaRenderer::new(RenderTarget::Rust);
    assert!(renderer.fields(&json!([1, 2])).is_empty());
}

#[test]
fn test_custom_struct_name() {
    let renderer = SchemaRenderer::new(RenderTarget::Go).with_struct_name("Payload");
    assert_eq!(renderer.target(), RenderTarget::Go);
    assert!(renderer
        .render(&json!({"id": 1}))
        .starts_with("type Payload struct {"));
}

// ============================================================================
// Convenience Function
// ============================================================================

#[test]
fn test_render_by_name() {
    let value = json!({"name": "test", "value": 123});
    let output = render(&value, "rust").unwrap();
    assert!(output.contains("#[serde(rename = \"name\")]"));
    assert!(output.contains("#[serde(rename = \"value\")]"));
    assert!(output.contains("value: f64"));
}

#[test]
fn test_render_unsupported_target() {
    let result = render(&json!({"a": 1}), "python");
    assert!(matches!(
        result,
        Err(Error::UnsupportedTarget { target }) if target == "python"
    ));
}
