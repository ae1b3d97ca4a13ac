//! Wrapper-mode bean descriptor.

use super::OperationBinding;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Wrapper-mode descriptor: an explicit selection of attributes and
/// operations to expose on an object whose source cannot carry a
/// declaration table.
///
/// The descriptor holds a shared handle to the target; the caller keeps
/// its own handle and the target is never cloned. Attribute names are
/// resolved against the target's fields at registration time; names that
/// do not resolve are skipped with a logged error. Operation names
/// select bindings from the side table by name. Every attribute exposed
/// through this mode is granted both read and write access
/// unconditionally.
///
/// Immutable after construction.
pub struct BeanDescriptor<T> {
    target: Arc<RwLock<T>>,
    name: String,
    attributes: Vec<String>,
    operations: Vec<String>,
    operation_table: Vec<OperationBinding<T>>,
}

impl<T> BeanDescriptor<T> {
    /// Wraps a target under the given logical bean name.
    #[must_use]
    pub fn new(target: Arc<RwLock<T>>, name: impl Into<String>) -> Self {
        Self {
            target,
            name: name.into(),
            attributes: Vec::new(),
            operations: Vec::new(),
            operation_table: Vec::new(),
        }
    }

    /// Selects the attribute names to expose.
    #[must_use]
    pub fn with_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Selects the operation names to expose.
    #[must_use]
    pub fn with_operations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operations = names.into_iter().map(Into::into).collect();
        self
    }

    /// Supplies the side table of operation bindings the selected names
    /// resolve against.
    #[must_use]
    pub fn with_operation_table(mut self, table: Vec<OperationBinding<T>>) -> Self {
        self.operation_table = table;
        self
    }

    /// Returns the shared target handle.
    #[must_use]
    pub const fn target(&self) -> &Arc<RwLock<T>> {
        &self.target
    }

    /// Returns the logical bean name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the selected attribute names in order.
    #[must_use]
    pub fn attribute_names(&self) -> &[String] {
        &self.attributes
    }

    /// Returns the selected operation names in order.
    #[must_use]
    pub fn operation_names(&self) -> &[String] {
        &self.operations
    }

    /// Returns the operation side table in declaration order.
    #[must_use]
    pub fn operation_table(&self) -> &[OperationBinding<T>] {
        &self.operation_table
    }
}

impl<T> fmt::Debug for BeanDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanDescriptor")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("operations", &self.operations)
            .finish_non_exhaustive()
    }
}
