//! Privileged field introspection over serde.
//!
//! This is the only module that reads or writes a target's fields by
//! name. It works by round-tripping the whole struct through
//! `serde_json`, which serialises private fields too: the capability to
//! see past normal visibility rules is deliberate and confined here, so
//! the rest of the crate never touches raw field access.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::RwLock;
use thiserror::Error;

/// Result type for introspection operations.
pub type IntrospectionResult<T> = Result<T, IntrospectionError>;

/// Errors raised while reading or writing target fields.
#[derive(Debug, Error)]
pub enum IntrospectionError {
    /// The target serialises to something other than a field map.
    #[error("target does not serialize to a field map")]
    NotAStruct,

    /// The named field does not exist on the target.
    #[error("no field named '{0}' on the target")]
    FieldNotFound(String),

    /// Serialising the target's fields failed.
    #[error("failed to read target fields: {0}")]
    Read(#[source] serde_json::Error),

    /// Rebuilding the target with the new field value failed, usually a
    /// kind mismatch.
    #[error("failed to write field '{name}': {source}")]
    Write {
        /// Field that rejected the value.
        name: String,
        /// Underlying deserialisation failure.
        source: serde_json::Error,
    },

    /// The target's lock is poisoned.
    #[error("target unavailable: {0}")]
    Unavailable(String),
}

/// Returns the target's fields as a name-to-value map.
///
/// # Errors
///
/// Returns [`IntrospectionError::Read`] when serialisation fails or
/// [`IntrospectionError::NotAStruct`] when the target is not a struct.
pub fn fields_of<T: Serialize>(target: &T) -> IntrospectionResult<Map<String, Value>> {
    match serde_json::to_value(target).map_err(IntrospectionError::Read)? {
        Value::Object(map) => Ok(map),
        _ => Err(IntrospectionError::NotAStruct),
    }
}

/// Returns the target's fields, taking the shared handle's read lock.
///
/// # Errors
///
/// Returns [`IntrospectionError::Unavailable`] when the lock is
/// poisoned, otherwise as [`fields_of`].
pub fn snapshot<T: Serialize>(target: &RwLock<T>) -> IntrospectionResult<Map<String, Value>> {
    let guard = target
        .read()
        .map_err(|err| IntrospectionError::Unavailable(err.to_string()))?;
    fields_of(&*guard)
}

/// Reads one field by name.
///
/// # Errors
///
/// Returns [`IntrospectionError::FieldNotFound`] when the name does not
/// resolve, otherwise as [`fields_of`].
pub fn read_field<T: Serialize>(target: &T, name: &str) -> IntrospectionResult<Value> {
    let mut fields = fields_of(target)?;
    fields
        .remove(name)
        .ok_or_else(|| IntrospectionError::FieldNotFound(name.to_owned()))
}

/// Writes one field by name, rebuilding the target from its amended
/// field map.
///
/// # Errors
///
/// Returns [`IntrospectionError::FieldNotFound`] when the name does not
/// resolve, or [`IntrospectionError::Write`] when the target rejects
/// the new value.
pub fn write_field<T>(target: &mut T, name: &str, value: Value) -> IntrospectionResult<()>
where
    T: Serialize + DeserializeOwned,
{
    let mut fields = fields_of(target)?;
    if !fields.contains_key(name) {
        return Err(IntrospectionError::FieldNotFound(name.to_owned()));
    }
    fields.insert(name.to_owned(), value);
    *target = serde_json::from_value(Value::Object(fields)).map_err(|source| {
        IntrospectionError::Write {
            name: name.to_owned(),
            source,
        }
    })?;
    Ok(())
}
