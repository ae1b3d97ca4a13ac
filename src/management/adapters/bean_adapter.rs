//! Dynamic dispatch adapter over an introspected target.

use super::introspection::{self, IntrospectionError};
use crate::management::domain::{
    Attribute, AttributeList, BeanInfo, OperationBinding, ValueKind,
};
use crate::management::ports::{DynamicBean, DynamicBeanError, DynamicBeanResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

/// [`DynamicBean`] implementation backed by serde introspection and a
/// table of operation bindings.
///
/// The adapter holds a shared handle to the target; it never clones the
/// target itself. Attribute reads resolve against the target's actual
/// fields, not the published metadata, so a field omitted from the
/// metadata remains reachable by name, keeping the same
/// privileged-access posture as the introspection module it builds on.
pub struct BeanAdapter<T> {
    target: Arc<RwLock<T>>,
    info: BeanInfo,
    operations: Vec<OperationBinding<T>>,
}

impl<T> BeanAdapter<T> {
    /// Creates an adapter from a shared target, published metadata, and
    /// operation bindings.
    #[must_use]
    pub const fn new(
        target: Arc<RwLock<T>>,
        info: BeanInfo,
        operations: Vec<OperationBinding<T>>,
    ) -> Self {
        Self {
            target,
            info,
            operations,
        }
    }

    fn map_read_error(err: IntrospectionError, name: &str) -> DynamicBeanError {
        match err {
            IntrospectionError::FieldNotFound(_) => {
                DynamicBeanError::AttributeNotFound(name.to_owned())
            }
            other => DynamicBeanError::access(other),
        }
    }

    fn map_write_error(err: IntrospectionError, name: &str) -> DynamicBeanError {
        match err {
            IntrospectionError::FieldNotFound(_) => {
                DynamicBeanError::AttributeNotFound(name.to_owned())
            }
            other @ IntrospectionError::Write { .. } => {
                DynamicBeanError::invalid_value(name, other)
            }
            other => DynamicBeanError::access(other),
        }
    }
}

impl<T> DynamicBean for BeanAdapter<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    fn get_attribute(&self, name: &str) -> DynamicBeanResult<Value> {
        let guard = self
            .target
            .read()
            .map_err(|err| DynamicBeanError::access(IntrospectionError::Unavailable(err.to_string())))?;
        introspection::read_field(&*guard, name).map_err(|err| Self::map_read_error(err, name))
    }

    fn set_attribute(&self, attribute: Attribute) -> DynamicBeanResult<()> {
        let mut guard = self
            .target
            .write()
            .map_err(|err| DynamicBeanError::access(IntrospectionError::Unavailable(err.to_string())))?;
        introspection::write_field(&mut *guard, &attribute.name, attribute.value)
            .map_err(|err| Self::map_write_error(err, &attribute.name))
    }

    fn get_attributes(&self, names: &[&str]) -> AttributeList {
        let mut list = AttributeList::new();
        for name in names {
            match self.get_attribute(name) {
                Ok(value) => list.push(Attribute::new(*name, value)),
                Err(err) => {
                    tracing::error!(attribute = *name, error = %err, "failed to read bean attribute");
                }
            }
        }
        list
    }

    fn set_attributes(&self, attributes: AttributeList) -> AttributeList {
        let mut applied = AttributeList::new();
        for attribute in attributes {
            match self.set_attribute(attribute.clone()) {
                Ok(()) => applied.push(attribute),
                Err(err) => {
                    tracing::error!(attribute = %attribute.name, error = %err, "failed to write bean attribute");
                }
            }
        }
        applied
    }

    fn invoke(
        &self,
        operation: &str,
        args: &[Value],
        signature: &[&str],
    ) -> DynamicBeanResult<Value> {
        let kinds = signature
            .iter()
            .map(|name| ValueKind::from_str(name))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                tracing::error!(operation, error = %err, "bean operation signature rejected");
                DynamicBeanError::invocation(operation, err)
            })?;

        let binding = self
            .operations
            .iter()
            .find(|b| b.spec().name() == operation && b.spec().matches_signature(&kinds))
            .ok_or_else(|| DynamicBeanError::operation_not_found(operation, signature))?;

        let mut guard = self
            .target
            .write()
            .map_err(|err| DynamicBeanError::access(IntrospectionError::Unavailable(err.to_string())))?;
        binding.call(&mut guard, args).map_err(|err| {
            tracing::error!(operation, error = %err, "bean operation failed");
            DynamicBeanError::invocation(operation, err)
        })
    }

    fn bean_info(&self) -> &BeanInfo {
        &self.info
    }
}

impl<T> fmt::Debug for BeanAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanAdapter")
            .field("info", &self.info)
            .field("operations", &self.operations)
            .finish_non_exhaustive()
    }
}
