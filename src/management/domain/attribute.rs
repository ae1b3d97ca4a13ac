//! Attribute values and published attribute metadata.

use super::ValueKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named attribute value, the currency of batch get/set calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name, matching a field on the managed target.
    pub name: String,
    /// Current or requested value.
    pub value: Value,
}

impl Attribute {
    /// Creates a named attribute value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Ordered list of named attribute values.
pub type AttributeList = Vec<Attribute>;

/// Published metadata for one exposed attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMetadata {
    name: String,
    kind: ValueKind,
    description: String,
    readable: bool,
    writable: bool,
    is_flag: bool,
}

impl AttributeMetadata {
    /// Creates attribute metadata.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: ValueKind,
        description: impl Into<String>,
        readable: bool,
        writable: bool,
        is_flag: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            readable,
            writable,
            is_flag,
        }
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute value kind.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the attribute can be read.
    #[must_use]
    pub const fn readable(&self) -> bool {
        self.readable
    }

    /// Returns whether the attribute can be written.
    #[must_use]
    pub const fn writable(&self) -> bool {
        self.writable
    }

    /// Returns whether the attribute follows boolean `is_*` accessor
    /// naming conventions.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        self.is_flag
    }
}
