//! Namespaced bean identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespaced identifier of a registered bean.
///
/// Rendered as `{domain}:name={name}`, e.g. `vitrine:name=connection_pool`.
/// The domain groups every bean published by one registration façade; the
/// name is caller-supplied per bean. Construction performs no validation:
/// malformed names are rejected by the management server at registration
/// time, not locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectName {
    domain: String,
    name: String,
}

impl ObjectName {
    /// Creates an object name from a domain and a logical bean name.
    #[must_use]
    pub fn new(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
        }
    }

    /// Returns the domain part.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the logical bean name part.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:name={}", self.domain, self.name)
    }
}
