//! Declaration table driving declared-mode registration.
//!
//! A [`ClassSpec`] is the code-side replacement for decorating a type
//! with management markers: it carries the bean-level marker with the
//! logical name, per-attribute access flags, and operation bindings
//! pairing signature metadata with a handler closure. Specs are built
//! with a consuming builder and are immutable afterwards.

use super::{OperationMetadata, ParamMetadata, ValueKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Bean-level marker carrying the logical name a type registers under.
///
/// Declared-mode registration refuses to proceed when a spec has no
/// marker, mirroring a type that was never declared manageable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanMarker {
    name: String,
}

impl BeanMarker {
    /// Creates a marker with the given logical bean name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the logical bean name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Declaration of one exposed attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    name: String,
    description: String,
    readable: bool,
    writable: bool,
    is_flag: bool,
}

impl AttributeSpec {
    /// Declares an attribute with explicit read/write access flags.
    ///
    /// The name must match a field on the managed type; declared-mode
    /// registration fails when it does not resolve.
    #[must_use]
    pub fn new(name: impl Into<String>, readable: bool, writable: bool) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            readable,
            writable,
            is_flag: false,
        }
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the attribute as a boolean-style flag accessor.
    #[must_use]
    pub const fn with_is_flag(mut self) -> Self {
        self.is_flag = true;
        self
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
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

    /// Returns whether the attribute is a boolean-style flag accessor.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        self.is_flag
    }
}

/// Declaration of one operation parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    name: String,
    kind: ValueKind,
}

impl ParamSpec {
    /// Declares a named parameter of the given kind.
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

/// Declaration of one exposed operation: name, signature, return kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    name: String,
    description: String,
    params: Vec<ParamSpec>,
    return_kind: ValueKind,
}

impl OperationSpec {
    /// Declares an operation with no parameters and a `void` return.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            params: Vec::new(),
            return_kind: ValueKind::Void,
        }
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a parameter to the signature.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.params.push(ParamSpec::new(name, kind));
        self
    }

    /// Sets the return value kind.
    #[must_use]
    pub const fn returning(mut self, kind: ValueKind) -> Self {
        self.return_kind = kind;
        self
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

    /// Returns the declared parameters in order.
    #[must_use]
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Returns the return value kind.
    #[must_use]
    pub const fn return_kind(&self) -> ValueKind {
        self.return_kind
    }

    /// Returns whether every kind in the signature is standard.
    ///
    /// Non-standard signatures draw a registration-time warning because
    /// a management client may fail to render them.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        self.return_kind.is_standard() && self.params.iter().all(|p| p.kind().is_standard())
    }

    /// Returns whether the declared parameter kinds match a dispatch
    /// signature.
    #[must_use]
    pub fn matches_signature(&self, signature: &[ValueKind]) -> bool {
        self.params.len() == signature.len()
            && self
                .params
                .iter()
                .zip(signature)
                .all(|(param, kind)| param.kind() == *kind)
    }

    /// Builds the published metadata for this declaration.
    #[must_use]
    pub fn metadata(&self) -> OperationMetadata {
        let params = self
            .params
            .iter()
            .map(|p| ParamMetadata::new(p.name(), p.kind()))
            .collect();
        OperationMetadata::new(&self.name, &self.description, params, self.return_kind)
    }
}

/// Failure raised by an operation handler.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct OperationFailure {
    message: String,
}

impl OperationFailure {
    /// Creates a failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for OperationFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Handler invoked when a dispatched operation matches a binding.
pub type OperationHandler<T> =
    Arc<dyn Fn(&mut T, &[Value]) -> Result<Value, OperationFailure> + Send + Sync>;

/// An operation declaration paired with its handler.
pub struct OperationBinding<T> {
    spec: OperationSpec,
    handler: OperationHandler<T>,
}

impl<T> OperationBinding<T> {
    /// Binds a handler to an operation declaration.
    #[must_use]
    pub fn new(
        spec: OperationSpec,
        handler: impl Fn(&mut T, &[Value]) -> Result<Value, OperationFailure> + Send + Sync + 'static,
    ) -> Self {
        Self {
            spec,
            handler: Arc::new(handler),
        }
    }

    /// Returns the operation declaration.
    #[must_use]
    pub const fn spec(&self) -> &OperationSpec {
        &self.spec
    }

    /// Runs the bound handler against the target.
    ///
    /// # Errors
    ///
    /// Returns the [`OperationFailure`] raised by the handler.
    pub fn call(&self, target: &mut T, args: &[Value]) -> Result<Value, OperationFailure> {
        (self.handler)(target, args)
    }
}

impl<T> Clone for OperationBinding<T> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> fmt::Debug for OperationBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationBinding")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// Declaration table for one manageable type.
///
/// Built with a consuming builder:
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use vitrine::management::domain::{AttributeSpec, ClassSpec, OperationSpec, ValueKind};
///
/// #[derive(Serialize, Deserialize)]
/// struct Pool {
///     size: u32,
/// }
///
/// let spec: ClassSpec<Pool> = ClassSpec::new()
///     .bean("connection_pool")
///     .attribute(AttributeSpec::new("size", true, true))
///     .operation(
///         OperationSpec::new("drain").returning(ValueKind::Integer),
///         |pool: &mut Pool, _args| {
///             let drained = pool.size;
///             pool.size = 0;
///             Ok(drained.into())
///         },
///     );
///
/// assert_eq!(spec.marker().map(|m| m.name()), Some("connection_pool"));
/// ```
pub struct ClassSpec<T> {
    class_name: String,
    description: String,
    marker: Option<BeanMarker>,
    attributes: Vec<AttributeSpec>,
    operations: Vec<OperationBinding<T>>,
}

impl<T> ClassSpec<T> {
    /// Creates an empty declaration table for `T`.
    ///
    /// The class name defaults to the concrete type name of `T`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            class_name: std::any::type_name::<T>().to_owned(),
            description: String::new(),
            marker: None,
            attributes: Vec::new(),
            operations: Vec::new(),
        }
    }

    /// Sets the bean-level marker with the logical registration name.
    #[must_use]
    pub fn bean(mut self, name: impl Into<String>) -> Self {
        self.marker = Some(BeanMarker::new(name));
        self
    }

    /// Sets the human-readable bean description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declares an exposed attribute.
    #[must_use]
    pub fn attribute(mut self, spec: AttributeSpec) -> Self {
        self.attributes.push(spec);
        self
    }

    /// Declares an exposed operation with its handler.
    #[must_use]
    pub fn operation(
        mut self,
        spec: OperationSpec,
        handler: impl Fn(&mut T, &[Value]) -> Result<Value, OperationFailure> + Send + Sync + 'static,
    ) -> Self {
        self.operations.push(OperationBinding::new(spec, handler));
        self
    }

    /// Returns the concrete type name the spec describes.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the human-readable bean description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the bean-level marker, when declared.
    #[must_use]
    pub const fn marker(&self) -> Option<&BeanMarker> {
        self.marker.as_ref()
    }

    /// Returns the declared attributes in order.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }

    /// Returns the declared operation bindings in order.
    #[must_use]
    pub fn operations(&self) -> &[OperationBinding<T>] {
        &self.operations
    }

    /// Consumes the spec, yielding the operation bindings.
    #[must_use]
    pub fn into_operations(self) -> Vec<OperationBinding<T>> {
        self.operations
    }
}

impl<T> Default for ClassSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ClassSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassSpec")
            .field("class_name", &self.class_name)
            .field("marker", &self.marker)
            .field("attributes", &self.attributes)
            .field("operations", &self.operations)
            .finish_non_exhaustive()
    }
}

/// Types that publish their own declaration table.
///
/// The declared-mode equivalent of marking a class manageable at the
/// source level.
pub trait Managed: Serialize + DeserializeOwned + Sized {
    /// Returns the declaration table for this type.
    fn class_spec() -> ClassSpec<Self>;
}
