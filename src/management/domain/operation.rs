//! Published operation metadata.

use super::ValueKind;
use serde::{Deserialize, Serialize};

/// Published metadata for one operation parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamMetadata {
    name: String,
    kind: ValueKind,
}

impl ParamMetadata {
    /// Creates parameter metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter value kind.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }
}

/// Published metadata for one exposed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationMetadata {
    name: String,
    description: String,
    params: Vec<ParamMetadata>,
    return_kind: ValueKind,
}

impl OperationMetadata {
    /// Creates operation metadata.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        params: Vec<ParamMetadata>,
        return_kind: ValueKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params,
            return_kind,
        }
    }

    /// Returns the operation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parameter metadata in declaration order.
    #[must_use]
    pub fn params(&self) -> &[ParamMetadata] {
        &self.params
    }

    /// Returns the return value kind.
    #[must_use]
    pub const fn return_kind(&self) -> ValueKind {
        self.return_kind
    }
}
