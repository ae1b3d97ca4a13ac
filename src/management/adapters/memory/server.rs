//! In-memory implementation of the management server port.

use crate::management::domain::ObjectName;
use crate::management::ports::{
    BeanRegistration, DynamicBean, ManagementServer, ManagementServerResult, RegistrationError,
};
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Characters an object name part may not contain, reserved by the
/// `{domain}:name={name}` rendering.
const RESERVED_NAME_CHARS: [char; 3] = [':', '=', ','];

/// Thread-safe in-process management server.
///
/// Holds the process-wide registry of `(object name, dispatch object)`
/// pairs and enforces the server-side naming rules: both name parts must
/// be non-empty and free of the reserved characters `:`, `=` and `,`.
/// Duplicate identifiers are rejected and the original entry is kept.
pub struct InMemoryManagementServer<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<HashMap<ObjectName, BeanRegistration>>>,
    clock: C,
}

impl InMemoryManagementServer<DefaultClock> {
    /// Creates an empty server using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(DefaultClock)
    }
}

impl Default for InMemoryManagementServer<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryManagementServer<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty server with the given clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    fn validate_name(object_name: &ObjectName) -> ManagementServerResult<()> {
        for (part, value) in [
            ("domain", object_name.domain()),
            ("name", object_name.name()),
        ] {
            if value.trim().is_empty() {
                return Err(RegistrationError::malformed(
                    object_name,
                    format!("{part} part must not be empty"),
                ));
            }
            if value.contains(RESERVED_NAME_CHARS) {
                return Err(RegistrationError::malformed(
                    object_name,
                    format!("{part} part contains a reserved character (':', '=' or ',')"),
                ));
            }
        }
        Ok(())
    }
}

impl<C> ManagementServer for InMemoryManagementServer<C>
where
    C: Clock + Send + Sync,
{
    fn register(
        &self,
        object_name: ObjectName,
        bean: Arc<dyn DynamicBean>,
    ) -> ManagementServerResult<()> {
        Self::validate_name(&object_name)?;

        let mut state = self
            .state
            .write()
            .map_err(|err| RegistrationError::rejected(std::io::Error::other(err.to_string())))?;

        if state.contains_key(&object_name) {
            return Err(RegistrationError::Duplicate(object_name));
        }

        let registration =
            BeanRegistration::new(object_name.clone(), bean, self.clock.utc());
        state.insert(object_name, registration);
        Ok(())
    }

    fn unregister(&self, object_name: &ObjectName) -> ManagementServerResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RegistrationError::rejected(std::io::Error::other(err.to_string())))?;

        state
            .remove(object_name)
            .map(|_| ())
            .ok_or_else(|| RegistrationError::NotRegistered(object_name.clone()))
    }

    fn lookup(&self, object_name: &ObjectName) -> Option<BeanRegistration> {
        let state = self.state.read().ok()?;
        state.get(object_name).cloned()
    }

    fn list_names(&self) -> Vec<ObjectName> {
        self.state
            .read()
            .map(|state| state.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl<C> fmt::Debug for InMemoryManagementServer<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryManagementServer")
            .field("registered", &self.list_names())
            .finish_non_exhaustive()
    }
}
