//! Management server port: the process-wide bean registry.

use super::DynamicBean;
use crate::management::domain::ObjectName;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for management server operations.
pub type ManagementServerResult<T> = Result<T, RegistrationError>;

/// A registered bean entry: the dispatch object paired with its
/// namespaced identifier and registration timestamp.
#[derive(Clone)]
pub struct BeanRegistration {
    object_name: ObjectName,
    bean: Arc<dyn DynamicBean>,
    registered_at: DateTime<Utc>,
}

impl BeanRegistration {
    /// Creates a registration entry.
    #[must_use]
    pub fn new(
        object_name: ObjectName,
        bean: Arc<dyn DynamicBean>,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            object_name,
            bean,
            registered_at,
        }
    }

    /// Returns the namespaced identifier.
    #[must_use]
    pub const fn object_name(&self) -> &ObjectName {
        &self.object_name
    }

    /// Returns the registered dispatch object.
    #[must_use]
    pub fn bean(&self) -> Arc<dyn DynamicBean> {
        Arc::clone(&self.bean)
    }

    /// Returns when the bean was registered.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl fmt::Debug for BeanRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanRegistration")
            .field("object_name", &self.object_name)
            .field("registered_at", &self.registered_at)
            .finish_non_exhaustive()
    }
}

/// Registry contract for the host management server.
///
/// The server owns the process-wide bean registry and routes later
/// attribute and operation calls back into the registered dispatch
/// objects. Thread-safety of concurrent dispatch is the server's
/// responsibility; registration itself is synchronous.
pub trait ManagementServer: Send + Sync {
    /// Registers a dispatch object under a namespaced identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Duplicate`] when the identifier is
    /// taken or [`RegistrationError::MalformedName`] when the identifier
    /// does not satisfy the server's naming rules.
    fn register(
        &self,
        object_name: ObjectName,
        bean: Arc<dyn DynamicBean>,
    ) -> ManagementServerResult<()>;

    /// Removes a registered bean.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::NotRegistered`] when no bean holds
    /// the identifier.
    fn unregister(&self, object_name: &ObjectName) -> ManagementServerResult<()>;

    /// Looks up a registered bean entry.
    ///
    /// Returns `None` when no bean holds the identifier.
    fn lookup(&self, object_name: &ObjectName) -> Option<BeanRegistration>;

    /// Returns the identifiers of every registered bean.
    fn list_names(&self) -> Vec<ObjectName>;
}

/// Errors returned by management server implementations.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A bean already holds the identifier.
    #[error("a bean is already registered as {0}")]
    Duplicate(ObjectName),

    /// The identifier does not satisfy the server's naming rules.
    #[error("malformed object name '{name}': {reason}")]
    MalformedName {
        /// The rejected identifier, rendered.
        name: String,
        /// Why the server rejected it.
        reason: String,
    },

    /// No bean holds the identifier.
    #[error("no bean registered as {0}")]
    NotRegistered(ObjectName),

    /// The server rejected the call for an internal reason.
    #[error("management server rejected the call: {0}")]
    Rejected(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistrationError {
    /// Builds a malformed-name rejection.
    #[must_use]
    pub fn malformed(name: &ObjectName, reason: impl Into<String>) -> Self {
        Self::MalformedName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Wraps an internal server failure.
    pub fn rejected(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Rejected(Arc::new(err))
    }
}
