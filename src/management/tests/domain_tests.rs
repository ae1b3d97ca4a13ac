//! Unit tests for management domain types.

use crate::management::domain::{
    AttributeSpec, BeanMarker, ClassSpec, ObjectName, OperationSpec, ParseValueKindError,
    ValueKind,
};
use crate::management::tests::support::{ConnectionPool, pool_spec};
use rstest::rstest;
use serde_json::{Value, json};
use std::str::FromStr;

// ── ObjectName rendering ───────────────────────────────────────────

#[rstest]
fn object_name_renders_domain_and_name() {
    let name = ObjectName::new("vitrine", "connection_pool");
    assert_eq!(name.to_string(), "vitrine:name=connection_pool");
    assert_eq!(name.domain(), "vitrine");
    assert_eq!(name.name(), "connection_pool");
}

#[rstest]
fn object_name_equality_covers_both_parts() {
    let a = ObjectName::new("vitrine", "pool");
    let b = ObjectName::new("vitrine", "pool");
    let c = ObjectName::new("other", "pool");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

// ── ValueKind classification and parsing ───────────────────────────

#[rstest]
#[case(json!("text"), ValueKind::String)]
#[case(json!(42), ValueKind::Integer)]
#[case(json!(-7), ValueKind::Integer)]
#[case(json!(2.5), ValueKind::Number)]
#[case(json!(true), ValueKind::Boolean)]
#[case(json!([1, 2]), ValueKind::Array)]
#[case(json!({"a": 1}), ValueKind::Object)]
#[case(Value::Null, ValueKind::Void)]
fn value_kind_classifies_values(#[case] value: Value, #[case] expected: ValueKind) {
    assert_eq!(ValueKind::of_value(&value), expected);
}

#[rstest]
#[case(ValueKind::String, "string")]
#[case(ValueKind::Integer, "integer")]
#[case(ValueKind::Number, "number")]
#[case(ValueKind::Boolean, "boolean")]
#[case(ValueKind::Array, "array")]
#[case(ValueKind::Object, "object")]
#[case(ValueKind::Void, "void")]
fn value_kind_name_round_trips(#[case] kind: ValueKind, #[case] name: &str) {
    assert_eq!(kind.as_str(), name);
    let parsed = ValueKind::from_str(name).expect("should parse");
    assert_eq!(parsed, kind);
}

#[rstest]
fn unknown_value_kind_is_rejected() {
    let result = ValueKind::from_str("java.lang.String");
    assert!(matches!(result, Err(ParseValueKindError(_))));
}

#[rstest]
#[case(ValueKind::String, true)]
#[case(ValueKind::Void, true)]
#[case(ValueKind::Array, false)]
#[case(ValueKind::Object, false)]
fn composite_kinds_are_not_standard(#[case] kind: ValueKind, #[case] standard: bool) {
    assert_eq!(kind.is_standard(), standard);
}

// ── Operation signatures ───────────────────────────────────────────

#[rstest]
fn operation_spec_matches_exact_signature_only() {
    let spec = OperationSpec::new("resize").with_param("capacity", ValueKind::Integer);
    assert!(spec.matches_signature(&[ValueKind::Integer]));
    assert!(!spec.matches_signature(&[ValueKind::String]));
    assert!(!spec.matches_signature(&[]));
    assert!(!spec.matches_signature(&[ValueKind::Integer, ValueKind::Integer]));
}

#[rstest]
fn operation_spec_with_composite_param_is_not_standard() {
    let standard = OperationSpec::new("ping").returning(ValueKind::String);
    let composite = OperationSpec::new("load").with_param("config", ValueKind::Object);
    assert!(standard.is_standard());
    assert!(!composite.is_standard());
}

#[rstest]
fn operation_spec_metadata_preserves_declaration() {
    let spec = OperationSpec::new("resize")
        .with_description("Adjust capacity")
        .with_param("capacity", ValueKind::Integer)
        .returning(ValueKind::Integer);
    let metadata = spec.metadata();
    assert_eq!(metadata.name(), "resize");
    assert_eq!(metadata.description(), "Adjust capacity");
    assert_eq!(metadata.params().len(), 1);
    assert_eq!(metadata.return_kind(), ValueKind::Integer);
}

// ── Declaration builders ───────────────────────────────────────────

#[rstest]
fn attribute_spec_defaults_and_builders() {
    let spec = AttributeSpec::new("active", true, true);
    assert!(spec.readable());
    assert!(spec.writable());
    assert!(!spec.is_flag());
    assert_eq!(spec.description(), "");

    let flagged = AttributeSpec::new("paused", true, false)
        .with_is_flag()
        .with_description("Paused state");
    assert!(flagged.is_flag());
    assert_eq!(flagged.description(), "Paused state");
}

#[rstest]
fn class_spec_carries_marker_and_declarations() {
    let spec = pool_spec();
    assert_eq!(spec.marker().map(BeanMarker::name), Some("connection_pool"));
    assert_eq!(spec.attributes().len(), 3);
    assert_eq!(spec.operations().len(), 3);
    assert!(spec.class_name().contains("ConnectionPool"));
}

#[rstest]
fn class_spec_without_bean_call_has_no_marker() {
    let spec: ClassSpec<ConnectionPool> = ClassSpec::new();
    assert!(spec.marker().is_none());
}
