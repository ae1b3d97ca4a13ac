//! Dynamic dispatch contract for registered beans.

use crate::management::domain::{Attribute, AttributeList, BeanInfo};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for dynamic bean operations.
pub type DynamicBeanResult<T> = Result<T, DynamicBeanError>;

/// Uniform get/set/invoke contract the management server calls back
/// into for every registered bean.
///
/// Single-item operations propagate failures to the caller. Batch
/// operations are best-effort: per-item failures are logged and the
/// item is omitted from the result, and the batch call itself never
/// fails.
pub trait DynamicBean: Send + Sync {
    /// Reads one attribute by name.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicBeanError::AttributeNotFound`] when the name
    /// resolves to no field on the target, or
    /// [`DynamicBeanError::Access`] when the underlying read fails.
    fn get_attribute(&self, name: &str) -> DynamicBeanResult<Value>;

    /// Writes one attribute.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicBeanError::AttributeNotFound`] when the name
    /// resolves to no field, or [`DynamicBeanError::InvalidValue`] when
    /// the underlying write rejects the value.
    fn set_attribute(&self, attribute: Attribute) -> DynamicBeanResult<()>;

    /// Reads several attributes, returning the readable subset in
    /// request order. Failed names are logged and omitted.
    fn get_attributes(&self, names: &[&str]) -> AttributeList;

    /// Writes several attributes, returning the succeeded subset in
    /// request order. Failed writes are logged and omitted.
    fn set_attributes(&self, attributes: AttributeList) -> AttributeList;

    /// Invokes an operation by name and exact parameter-kind signature.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicBeanError::OperationNotFound`] when no
    /// registered operation matches both name and signature, or
    /// [`DynamicBeanError::Invocation`] when the signature cannot be
    /// parsed or the underlying call fails.
    fn invoke(&self, operation: &str, args: &[Value], signature: &[&str])
    -> DynamicBeanResult<Value>;

    /// Returns the published metadata for this bean.
    fn bean_info(&self) -> &BeanInfo;
}

/// Errors surfaced by dynamic bean dispatch.
#[derive(Debug, Clone, Error)]
pub enum DynamicBeanError {
    /// The attribute name resolves to no field on the target.
    #[error("no attribute named '{0}' on the managed bean")]
    AttributeNotFound(String),

    /// A write attempt failed at the underlying assignment.
    #[error("invalid value for attribute '{name}': {source}")]
    InvalidValue {
        /// Attribute that rejected the value.
        name: String,
        /// Underlying failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The underlying attribute read failed.
    #[error("failed to access managed bean state: {0}")]
    Access(Arc<dyn std::error::Error + Send + Sync>),

    /// No operation matches the requested name and signature.
    #[error("no operation named '{name}' with signature ({signature}) on the managed bean")]
    OperationNotFound {
        /// Requested operation name.
        name: String,
        /// Requested signature, comma-separated.
        signature: String,
    },

    /// The underlying operation call failed.
    #[error("operation '{operation}' failed: {source}")]
    Invocation {
        /// Operation that failed.
        operation: String,
        /// Underlying failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl DynamicBeanError {
    /// Wraps an underlying read failure.
    pub fn access(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Access(Arc::new(err))
    }

    /// Wraps an underlying write failure for the named attribute.
    pub fn invalid_value(
        name: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidValue {
            name: name.into(),
            source: Arc::new(err),
        }
    }

    /// Builds an [`DynamicBeanError::OperationNotFound`] for a
    /// name/signature pair.
    #[must_use]
    pub fn operation_not_found(name: impl Into<String>, signature: &[&str]) -> Self {
        Self::OperationNotFound {
            name: name.into(),
            signature: signature.join(", "),
        }
    }

    /// Wraps an underlying operation failure.
    pub fn invocation(
        operation: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Invocation {
            operation: operation.into(),
            source: Arc::new(err),
        }
    }
}
