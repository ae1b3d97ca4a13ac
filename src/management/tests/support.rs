//! Shared fixtures for management unit tests.

use crate::management::domain::{
    AttributeSpec, ClassSpec, OperationFailure, OperationSpec, ValueKind,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::{Arc, RwLock};

/// Test target with a mix of standard and composite fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionPool {
    pub endpoint: String,
    pub active: u32,
    pub paused: bool,
    pub tags: Vec<String>,
}

impl ConnectionPool {
    pub fn sample() -> Self {
        Self {
            endpoint: "db.internal:5432".to_owned(),
            active: 8,
            paused: false,
            tags: vec!["primary".to_owned()],
        }
    }
}

/// Shared handle around the sample pool.
pub fn sample_target() -> Arc<RwLock<ConnectionPool>> {
    Arc::new(RwLock::new(ConnectionPool::sample()))
}

/// Full declaration table for [`ConnectionPool`].
pub fn pool_spec() -> ClassSpec<ConnectionPool> {
    ClassSpec::new()
        .bean("connection_pool")
        .with_description("Connection pool under management")
        .attribute(AttributeSpec::new("endpoint", true, false).with_description("Target endpoint"))
        .attribute(AttributeSpec::new("active", true, true))
        .attribute(AttributeSpec::new("paused", true, true).with_is_flag())
        .operation(
            OperationSpec::new("drain")
                .with_description("Close all connections")
                .returning(ValueKind::Integer),
            |pool: &mut ConnectionPool, _args| {
                let drained = u64::from(pool.active);
                pool.active = 0;
                Ok(Value::from(drained))
            },
        )
        .operation(
            OperationSpec::new("resize")
                .with_param("capacity", ValueKind::Integer)
                .returning(ValueKind::Integer),
            |pool: &mut ConnectionPool, args| {
                let capacity: u32 = args
                    .first()
                    .cloned()
                    .ok_or_else(|| OperationFailure::new("missing capacity argument"))
                    .and_then(|v| serde_json::from_value(v).map_err(OperationFailure::from))?;
                pool.active = capacity;
                Ok(Value::from(u64::from(capacity)))
            },
        )
        .operation(
            OperationSpec::new("explode").with_description("Always fails"),
            |_pool: &mut ConnectionPool, _args| Err(OperationFailure::new("boom")),
        )
}
