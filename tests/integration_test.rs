use std::collections::HashMap;

use form_extract::{
    ExtractConfig, ExtractErrorKind, FieldType, RawInput, Rule, RuleSet, Schema, Value,
};
use serde_json::json;

fn raw(fields: &[(&str, &[&str])]) -> RawInput {
    fields
        .iter()
        .map(|(name, values)| {
            (
                name.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
}

fn rules(schema: serde_json::Value) -> RuleSet {
    RuleSet::from_json(&schema).expect("schema should load")
}

#[test]
fn required_field_omission_fails() {
    let rules = rules(json!({ "name": { "must": {} } }));

    let error = rules.extract(&HashMap::new()).unwrap_err();
    assert_eq!(error.kind(), ExtractErrorKind::MissingRequired);
    assert_eq!(error.field(), "name");
}

#[test]
fn optional_field_omission_succeeds_empty() {
    let rules = rules(json!({ "name": {} }));

    let output = rules.extract(&HashMap::new()).unwrap();
    assert!(output.is_empty());
}

#[test]
fn singular_type_rejects_multiple_values() {
    let rules = rules(json!({ "age": { "type": "int" } }));

    let error = rules.extract(&raw(&[("age", &["1", "2"])])).unwrap_err();
    assert_eq!(error.kind(), ExtractErrorKind::ArityMismatch);
}

#[test]
fn int_range_check() {
    let rules = rules(json!({ "age": { "type": "int", "min": 18, "max": 65 } }));

    assert!(rules.extract(&raw(&[("age", &["17"])])).is_err());

    let output = rules.extract(&raw(&[("age", &["18"])])).unwrap();
    assert_eq!(output.len(), 1);
    assert_eq!(output["age"], Value::Int(18));
}

#[test]
fn collection_amount_check() {
    let rules = rules(json!({ "tags": { "type": "strings", "min_amt": 1, "max_amt": 3 } }));

    let error = rules
        .extract(&raw(&[("tags", &["a", "b", "c", "d"])]))
        .unwrap_err();
    assert_eq!(error.kind(), ExtractErrorKind::AmountViolation);

    let output = rules.extract(&raw(&[("tags", &["a", "b"])])).unwrap();
    assert_eq!(
        output["tags"],
        Value::Strings(vec!["a".to_string(), "b".to_string()])
    );
}

#[test]
fn float_range_uses_ceiling() {
    let rules = rules(json!({ "score": { "type": "float", "max": 10 } }));

    assert!(rules.extract(&raw(&[("score", &["10.1"])])).is_err());

    let output = rules.extract(&raw(&[("score", &["9.9"])])).unwrap();
    assert_eq!(output["score"], Value::Float(9.9));
}

#[test]
fn float_overflow_is_malformed() {
    for schema in [
        json!({ "score": { "type": "float" } }),
        json!({ "score": { "type": "float", "min": 0 } }),
        json!({ "score": { "type": "floats" } }),
    ] {
        let rules = rules(schema);
        for value in ["1e400", "-1e400"] {
            let error = rules.extract(&raw(&[("score", &[value])])).unwrap_err();
            assert_eq!(error.kind(), ExtractErrorKind::ParseFailure, "{value}");
        }
    }
}

#[test]
fn unchecked_passthrough() {
    let rules = rules(json!({ "free": "anything-not-a-rule-map" }));

    let output = rules.extract(&raw(&[("free", &["x", "y"])])).unwrap();
    assert_eq!(
        output["free"],
        Value::Strings(vec!["x".to_string(), "y".to_string()])
    );
}

#[test]
fn unknown_type_rejected() {
    let rules = rules(json!({ "x": { "type": "weird" } }));

    let error = rules.extract(&raw(&[("x", &["1"])])).unwrap_err();
    assert_eq!(error.kind(), ExtractErrorKind::UnknownType);
}

#[test]
fn extraction_is_idempotent() {
    let rules = rules(json!({
        "name": { "must": {}, "max": 20 },
        "age": { "type": "int", "min": 0 },
        "ids": { "type": "ints", "max_amt": 4 },
        "ok": { "type": "bool" },
    }));
    let input = raw(&[
        ("name", &["Alice"]),
        ("age", &["41"]),
        ("ids", &["4", "8", "15"]),
        ("ok", &["t"]),
    ]);

    let first = rules.extract(&input);
    let second = rules.extract(&input);
    assert!(first.is_ok());
    assert_eq!(first, second);
}

#[test]
fn failure_in_any_field_discards_everything() {
    let rules = rules(json!({
        "name": { "must": {} },
        "age": { "type": "int" },
    }));

    let result = rules.extract(&raw(&[("name", &["Alice"]), ("age", &["old"])]));
    assert!(result.is_err());
    assert!(!rules.is_valid(&raw(&[("name", &["Alice"]), ("age", &["old"])])));
}

#[test]
fn optional_untyped_failure_dropped_by_default_but_strict_aborts() {
    let schema = Schema::from_json(&json!({
        "nick": { "max": 3 },
        "age": { "type": "int" },
    }))
    .unwrap();
    let input = raw(&[("nick", &["toolong"]), ("age", &["30"])]);

    let lenient = RuleSet::new(schema.clone());
    let output = lenient.extract(&input).unwrap();
    assert!(!output.contains_key("nick"));
    assert_eq!(output["age"], Value::Int(30));

    let strict = RuleSet::with_config(schema, ExtractConfig::strict());
    let error = strict.extract(&input).unwrap_err();
    assert_eq!(error.field(), "nick");
    assert_eq!(error.kind(), ExtractErrorKind::RangeViolation);
}

#[test]
fn builder_and_json_schemas_agree() {
    let from_json = Schema::from_json(&json!({
        "age": { "type": "int", "must": true, "min": 18, "max": 65 },
    }))
    .unwrap();
    let built = Schema::new().with_field("age", Rule::new(FieldType::Int).required().min(18).max(65));

    assert_eq!(from_json, built);
}

#[test]
fn replaced_schema_applies_to_next_extraction() {
    let rules = rules(json!({ "age": { "type": "int", "must": {} } }));
    let input = raw(&[("name", &["Bob"])]);

    assert!(rules.extract(&input).is_err());

    rules.replace_schema(Schema::from_json(&json!({ "name": { "must": {} } })).unwrap());

    let output = rules.extract(&input).unwrap();
    assert_eq!(output["name"], Value::String("Bob".to_string()));
}

#[test]
fn output_serializes_to_json() {
    let rules = rules(json!({
        "age": { "type": "int" },
        "ok": { "type": "bools" },
    }));

    let output = rules
        .extract(&raw(&[("age", &["7"]), ("ok", &["1", "0"])]))
        .unwrap();
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json, json!({ "age": 7, "ok": [true, false] }));
}

#[test]
fn error_message_does_not_leak_input() {
    let rules = rules(json!({ "pin": { "type": "int", "max": 9999 } }));
    let secret = "SECRET_PASSWORD_12345";

    let error = rules.extract(&raw(&[("pin", &[secret])])).unwrap_err();

    let message = format!("{}", error);
    assert!(!message.contains(secret));
    assert!(message.contains("pin"));
}
