//! Published bean metadata.

use super::{AttributeMetadata, OperationMetadata};
use serde::{Deserialize, Serialize};

/// The uniform metadata structure published for one registered bean.
///
/// Management clients use this to discover what a bean exposes before
/// issuing attribute or operation calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeanInfo {
    class_name: String,
    description: String,
    attributes: Vec<AttributeMetadata>,
    operations: Vec<OperationMetadata>,
}

impl BeanInfo {
    /// Creates bean metadata.
    #[must_use]
    pub fn new(
        class_name: impl Into<String>,
        description: impl Into<String>,
        attributes: Vec<AttributeMetadata>,
        operations: Vec<OperationMetadata>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            description: description.into(),
            attributes,
            operations,
        }
    }

    /// Returns the concrete type name of the managed target.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the human-readable bean description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the published attribute metadata in declaration order.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeMetadata] {
        &self.attributes
    }

    /// Returns the published operation metadata in declaration order.
    #[must_use]
    pub fn operations(&self) -> &[OperationMetadata] {
        &self.operations
    }

    /// Looks up published attribute metadata by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeMetadata> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    /// Looks up published operation metadata by name.
    ///
    /// When several bindings share a name, the first declared wins.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&OperationMetadata> {
        self.operations.iter().find(|o| o.name() == name)
    }
}
