//! Unit tests for the dynamic dispatch adapter.

use crate::management::adapters::BeanAdapter;
use crate::management::domain::{Attribute, BeanInfo, ValueKind};
use crate::management::ports::{DynamicBean, DynamicBeanError};
use crate::management::tests::support::{ConnectionPool, pool_spec, sample_target};
use rstest::rstest;
use serde_json::json;
use std::sync::{Arc, RwLock};

/// Builds an adapter exposing the full pool declaration.
fn pool_adapter(target: Arc<RwLock<ConnectionPool>>) -> BeanAdapter<ConnectionPool> {
    let spec = pool_spec();
    let info = BeanInfo::new(spec.class_name(), spec.description(), Vec::new(), Vec::new());
    BeanAdapter::new(target, info, spec.into_operations())
}

// ── Single attribute access ────────────────────────────────────────

#[rstest]
fn get_set_get_round_trip_on_writable_attribute() {
    let adapter = pool_adapter(sample_target());

    let before = adapter.get_attribute("active").expect("read");
    adapter
        .set_attribute(Attribute::new("active", before.clone()))
        .expect("write back");
    let after = adapter.get_attribute("active").expect("re-read");
    assert_eq!(before, after);

    adapter
        .set_attribute(Attribute::new("active", json!(3)))
        .expect("write");
    assert_eq!(adapter.get_attribute("active").expect("read"), json!(3));
}

#[rstest]
fn get_unknown_attribute_fails_with_not_found() {
    let adapter = pool_adapter(sample_target());
    let result = adapter.get_attribute("missing");
    assert!(matches!(
        result,
        Err(DynamicBeanError::AttributeNotFound(name)) if name == "missing"
    ));
}

#[rstest]
fn set_with_mismatched_kind_fails_with_invalid_value() {
    let target = sample_target();
    let adapter = pool_adapter(Arc::clone(&target));
    let result = adapter.set_attribute(Attribute::new("active", json!("oops")));
    assert!(matches!(
        result,
        Err(DynamicBeanError::InvalidValue { name, .. }) if name == "active"
    ));
    let pool = target.read().expect("target lock");
    assert_eq!(pool.active, 8);
}

#[rstest]
fn adapter_reads_fields_absent_from_published_metadata() {
    // Privileged access resolves against the target's fields, not the
    // published metadata.
    let adapter = pool_adapter(sample_target());
    let value = adapter.get_attribute("tags").expect("read");
    assert_eq!(value, json!(["primary"]));
}

// ── Batch access ───────────────────────────────────────────────────

#[rstest]
fn get_attributes_returns_valid_subset_in_request_order() {
    let adapter = pool_adapter(sample_target());
    let list = adapter.get_attributes(&["paused", "missing", "endpoint"]);
    let names: Vec<&str> = list.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["paused", "endpoint"]);
    assert_eq!(list.first().map(|a| &a.value), Some(&json!(false)));
}

#[rstest]
fn set_attributes_returns_succeeded_subset() {
    let target = sample_target();
    let adapter = pool_adapter(Arc::clone(&target));
    let applied = adapter.set_attributes(vec![
        Attribute::new("active", json!(12)),
        Attribute::new("missing", json!(0)),
        Attribute::new("paused", json!(true)),
    ]);
    let names: Vec<&str> = applied.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["active", "paused"]);

    let pool = target.read().expect("target lock");
    assert_eq!(pool.active, 12);
    assert!(pool.paused);
}

#[rstest]
fn empty_batch_is_a_no_op() {
    let adapter = pool_adapter(sample_target());
    assert!(adapter.get_attributes(&[]).is_empty());
    assert!(adapter.set_attributes(Vec::new()).is_empty());
}

// ── Operation dispatch ─────────────────────────────────────────────

#[rstest]
fn invoke_dispatches_on_exact_signature() {
    let target = sample_target();
    let adapter = pool_adapter(Arc::clone(&target));

    let result = adapter
        .invoke("resize", &[json!(32)], &["integer"])
        .expect("resize");
    assert_eq!(result, json!(32));
    assert_eq!(
        target.read().expect("target lock").active,
        32
    );

    let drained = adapter.invoke("drain", &[], &[]).expect("drain");
    assert_eq!(drained, json!(32));
}

#[rstest]
#[case::wrong_kind(&["string"])]
#[case::extra_param(&["integer", "integer"])]
#[case::no_params(&[])]
fn invoke_with_unmatched_signature_fails_with_not_found(#[case] signature: &[&str]) {
    let adapter = pool_adapter(sample_target());
    let result = adapter.invoke("resize", &[json!(1)], signature);
    assert!(matches!(
        result,
        Err(DynamicBeanError::OperationNotFound { name, .. }) if name == "resize"
    ));
}

#[rstest]
fn invoke_unknown_operation_fails_with_not_found() {
    let adapter = pool_adapter(sample_target());
    let result = adapter.invoke("reboot", &[], &[]);
    assert!(matches!(
        result,
        Err(DynamicBeanError::OperationNotFound { .. })
    ));
}

#[rstest]
fn failing_handler_surfaces_as_invocation_error_with_cause() {
    let adapter = pool_adapter(sample_target());
    let result = adapter.invoke("explode", &[], &[]);
    match result {
        Err(DynamicBeanError::Invocation { operation, source }) => {
            assert_eq!(operation, "explode");
            assert_eq!(source.to_string(), "boom");
        }
        other => panic!("expected invocation error, got {other:?}"),
    }
}

#[rstest]
fn invoke_with_unparseable_signature_fails_with_invocation_error() {
    let adapter = pool_adapter(sample_target());
    let result = adapter.invoke("resize", &[json!(1)], &["java.lang.Integer"]);
    assert!(matches!(result, Err(DynamicBeanError::Invocation { .. })));
}

// ── Metadata ───────────────────────────────────────────────────────

#[rstest]
fn bean_info_exposes_operation_kind_vocabulary() {
    let spec = pool_spec();
    let operations = spec
        .operations()
        .iter()
        .map(|b| b.spec().metadata())
        .collect();
    let info = BeanInfo::new(spec.class_name(), "", Vec::new(), operations);
    let adapter = BeanAdapter::new(sample_target(), info, spec.into_operations());

    let published = adapter.bean_info();
    let resize = published.operation("resize").expect("resize metadata");
    assert_eq!(resize.params().len(), 1);
    assert_eq!(
        resize.params().first().map(|p| p.kind()),
        Some(ValueKind::Integer)
    );
}
