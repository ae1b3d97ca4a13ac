//! Unit tests for the serde-backed introspection adapter.

use crate::management::adapters::introspection::{
    self, IntrospectionError,
};
use crate::management::tests::support::ConnectionPool;
use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Target with non-public fields only; introspection still sees them.
#[derive(Debug, Serialize, Deserialize)]
struct Opaque {
    secret: String,
    attempts: u8,
}

#[rstest]
fn fields_of_lists_every_field_including_private() {
    let opaque = Opaque {
        secret: "hunter2".to_owned(),
        attempts: 3,
    };
    let fields = introspection::fields_of(&opaque).expect("fields");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields.get("secret"), Some(&json!("hunter2")));
    assert_eq!(fields.get("attempts"), Some(&json!(3)));
}

#[rstest]
fn non_struct_target_is_rejected() {
    let result = introspection::fields_of(&"just a string".to_owned());
    assert!(matches!(result, Err(IntrospectionError::NotAStruct)));
}

#[rstest]
fn read_field_returns_current_value() {
    let pool = ConnectionPool::sample();
    let value = introspection::read_field(&pool, "active").expect("read");
    assert_eq!(value, json!(8));
}

#[rstest]
fn read_unknown_field_fails() {
    let pool = ConnectionPool::sample();
    let result = introspection::read_field(&pool, "missing");
    assert!(matches!(
        result,
        Err(IntrospectionError::FieldNotFound(name)) if name == "missing"
    ));
}

#[rstest]
fn write_field_replaces_value_in_place() {
    let mut pool = ConnectionPool::sample();
    introspection::write_field(&mut pool, "active", json!(20)).expect("write");
    assert_eq!(pool.active, 20);
    // Untouched fields survive the round-trip.
    assert_eq!(pool.endpoint, "db.internal:5432");
}

#[rstest]
fn write_with_mismatched_kind_fails() {
    let mut pool = ConnectionPool::sample();
    let result = introspection::write_field(&mut pool, "active", json!("not a number"));
    assert!(matches!(result, Err(IntrospectionError::Write { name, .. }) if name == "active"));
    // A rejected write leaves the target unchanged.
    assert_eq!(pool.active, 8);
}

#[rstest]
fn write_unknown_field_fails_without_touching_target() {
    let mut pool = ConnectionPool::sample();
    let result = introspection::write_field(&mut pool, "missing", json!(1));
    assert!(matches!(result, Err(IntrospectionError::FieldNotFound(_))));
    assert_eq!(pool, ConnectionPool::sample());
}
