//! Registration façade for management beans.
//!
//! [`BeanManager`] accepts either a declared-mode [`ClassSpec`] or a
//! wrapper-mode [`BeanDescriptor`], builds the published metadata plus
//! the dynamic dispatch adapter, and registers the pair with the
//! management server under `{domain}:name={bean name}`.

use crate::management::adapters::introspection::{self, IntrospectionError};
use crate::management::adapters::BeanAdapter;
use crate::management::domain::{
    AttributeMetadata, AttributeSpec, BeanDescriptor, BeanInfo, ClassSpec, Managed, ObjectName,
    OperationBinding, OperationMetadata, OperationSpec, ValueKind,
};
use crate::management::ports::{DynamicBean, ManagementServer, RegistrationError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Domain beans register under when the façade is not reconfigured.
pub const DEFAULT_DOMAIN: &str = "vitrine";

/// Logical name the façade registers itself under.
const MANAGER_BEAN_NAME: &str = "bean_manager";

/// Errors aborting one registration attempt.
///
/// Registration failures are fatal to the attempt, logged before being
/// returned, and never tear down the process.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// The declaration table carries no bean-level marker.
    #[error("type '{0}' declares no bean marker")]
    MissingBeanMarker(String),

    /// A declared attribute resolves to no field on the target.
    #[error("declared attribute '{attribute}' does not resolve to a field on '{class_name}'")]
    AttributeMissing {
        /// Type the declaration belongs to.
        class_name: String,
        /// Attribute name that failed to resolve.
        attribute: String,
    },

    /// Reading the target's fields failed.
    #[error(transparent)]
    Introspection(#[from] IntrospectionError),

    /// The management server rejected the registration.
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

/// Result type for registration façade operations.
pub type RegisterResult<T> = Result<T, RegisterError>;

/// Registration façade over a management server.
///
/// Owns the domain part of every identifier it publishes. The domain is
/// explicit per-instance configuration, not ambient global state; two
/// managers over the same server may publish under different domains.
#[derive(Debug, Clone)]
pub struct BeanManager<S>
where
    S: ManagementServer,
{
    server: Arc<S>,
    domain: String,
}

impl<S> BeanManager<S>
where
    S: ManagementServer,
{
    /// Creates a façade publishing under [`DEFAULT_DOMAIN`].
    #[must_use]
    pub fn new(server: Arc<S>) -> Self {
        Self {
            server,
            domain: DEFAULT_DOMAIN.to_owned(),
        }
    }

    /// Sets the domain part of published identifiers.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Returns the configured domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the underlying management server.
    #[must_use]
    pub const fn server(&self) -> &Arc<S> {
        &self.server
    }

    /// Registers a type that publishes its own declaration table.
    ///
    /// # Errors
    ///
    /// As [`BeanManager::register_declared`].
    pub fn register_managed<T>(&self, target: Arc<RwLock<T>>) -> RegisterResult<ObjectName>
    where
        T: Managed + Send + Sync + 'static,
    {
        self.register_declared(target, T::class_spec())
    }

    /// Registers a target driven by a declaration table.
    ///
    /// Every declared attribute must resolve to a field on the target;
    /// attributes and operations involving non-standard kinds draw a
    /// warning but do not block registration.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::MissingBeanMarker`] when the spec has no
    /// bean-level marker (no server call is made),
    /// [`RegisterError::AttributeMissing`] when a declared attribute
    /// resolves to no field, [`RegisterError::Introspection`] when the
    /// target's fields cannot be read, or
    /// [`RegisterError::Registration`] when the server rejects the
    /// name.
    pub fn register_declared<T>(
        &self,
        target: Arc<RwLock<T>>,
        spec: ClassSpec<T>,
    ) -> RegisterResult<ObjectName>
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        let class_name = spec.class_name().to_owned();
        let Some(marker) = spec.marker().cloned() else {
            tracing::error!(class = %class_name, "refusing to register type without a bean marker");
            return Err(RegisterError::MissingBeanMarker(class_name));
        };

        let fields = introspection::snapshot(&target)?;

        let mut attributes = Vec::with_capacity(spec.attributes().len());
        for attr in spec.attributes() {
            let Some(value) = fields.get(attr.name()) else {
                tracing::error!(
                    class = %class_name,
                    attribute = attr.name(),
                    "declared attribute does not resolve to a field"
                );
                return Err(RegisterError::AttributeMissing {
                    class_name,
                    attribute: attr.name().to_owned(),
                });
            };
            attributes.push(Self::attribute_metadata(&class_name, attr, value));
        }

        let operations = spec
            .operations()
            .iter()
            .map(|binding| Self::operation_metadata(&class_name, binding.spec()))
            .collect();

        let info = BeanInfo::new(&class_name, spec.description(), attributes, operations);
        let object_name = self.object_name(marker.name());
        let adapter = BeanAdapter::new(target, info, spec.into_operations());
        self.register_with_server(object_name, Arc::new(adapter), &class_name)
    }

    /// Registers a target driven by a wrapper-mode descriptor.
    ///
    /// Attribute names that resolve to no field are skipped with a
    /// logged error; operation names absent from the side table are
    /// skipped with a logged warning. Registration proceeds with the
    /// resolvable subset. Every published attribute is granted both
    /// read and write access.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::Introspection`] when the target's
    /// fields cannot be read, or [`RegisterError::Registration`] when
    /// the server rejects the name.
    pub fn register_wrapped<T>(&self, descriptor: BeanDescriptor<T>) -> RegisterResult<ObjectName>
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        let class_name = std::any::type_name::<T>();
        let fields = introspection::snapshot(descriptor.target())?;

        let mut attributes = Vec::new();
        for name in descriptor.attribute_names() {
            let Some(value) = fields.get(name) else {
                tracing::error!(
                    class = class_name,
                    attribute = %name,
                    "wrapped attribute does not resolve to a field"
                );
                continue;
            };
            // Wrapper mode grants read and write unconditionally.
            let attr = AttributeSpec::new(name.as_str(), true, true);
            attributes.push(Self::attribute_metadata(class_name, &attr, value));
        }

        let mut operations = Vec::new();
        let mut bindings: Vec<OperationBinding<T>> = Vec::new();
        for name in descriptor.operation_names() {
            let matched: Vec<_> = descriptor
                .operation_table()
                .iter()
                .filter(|binding| binding.spec().name() == name)
                .collect();
            if matched.is_empty() {
                tracing::warn!(
                    class = class_name,
                    operation = %name,
                    "wrapped operation does not resolve to a binding"
                );
                continue;
            }
            for binding in matched {
                operations.push(Self::operation_metadata(class_name, binding.spec()));
                bindings.push(binding.clone());
            }
        }

        let info = BeanInfo::new(class_name, "", attributes, operations);
        let object_name = self.object_name(descriptor.name());
        let adapter = BeanAdapter::new(Arc::clone(descriptor.target()), info, bindings);
        self.register_with_server(object_name, Arc::new(adapter), class_name)
    }

    /// Registers a pre-built dispatch object directly, bypassing
    /// introspection.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::Registration`] when the server rejects
    /// the name. No other validation is performed.
    pub fn register_bean(
        &self,
        name: &str,
        bean: Arc<dyn DynamicBean>,
    ) -> RegisterResult<ObjectName> {
        let class_name = bean.bean_info().class_name().to_owned();
        let object_name = self.object_name(name);
        self.register_with_server(object_name, bean, &class_name)
    }

    /// Registers the façade's own status bean.
    ///
    /// The bean exposes the configured `domain` as a read-only
    /// attribute and a `log(message)` operation emitting an info-level
    /// log line.
    ///
    /// # Errors
    ///
    /// As [`BeanManager::register_declared`].
    pub fn register_self(&self) -> RegisterResult<ObjectName> {
        let status = Arc::new(RwLock::new(ManagerStatus {
            domain: self.domain.clone(),
        }));
        let spec: ClassSpec<ManagerStatus> = ClassSpec::new()
            .bean(MANAGER_BEAN_NAME)
            .with_description("Bean registration façade status")
            .attribute(
                AttributeSpec::new("domain", true, false)
                    .with_description("Domain part of published identifiers"),
            )
            .operation(
                OperationSpec::new("log")
                    .with_description("Write a message to the application log")
                    .with_param("message", ValueKind::String),
                |_status: &mut ManagerStatus, args: &[Value]| {
                    let message = args.first().and_then(Value::as_str).unwrap_or_default();
                    tracing::info!("{message}");
                    Ok(Value::Null)
                },
            );
        self.register_declared(status, spec)
    }

    fn object_name(&self, name: &str) -> ObjectName {
        ObjectName::new(&self.domain, name)
    }

    fn attribute_metadata(
        class_name: &str,
        spec: &AttributeSpec,
        value: &Value,
    ) -> AttributeMetadata {
        let kind = ValueKind::of_value(value);
        if !kind.is_standard() {
            tracing::warn!(
                class = class_name,
                attribute = spec.name(),
                %kind,
                "attribute kind is not standard; a client may not render it"
            );
        }
        AttributeMetadata::new(
            spec.name(),
            kind,
            spec.description(),
            spec.readable(),
            spec.writable(),
            spec.is_flag(),
        )
    }

    fn operation_metadata(class_name: &str, spec: &OperationSpec) -> OperationMetadata {
        if !spec.is_standard() {
            tracing::warn!(
                class = class_name,
                operation = spec.name(),
                "operation signature involves a non-standard kind; a client may not render it"
            );
        }
        spec.metadata()
    }

    fn register_with_server(
        &self,
        object_name: ObjectName,
        bean: Arc<dyn DynamicBean>,
        class_name: &str,
    ) -> RegisterResult<ObjectName> {
        match self.server.register(object_name.clone(), bean) {
            Ok(()) => {
                tracing::info!(bean = %object_name, class = class_name, "registered management bean");
                Ok(object_name)
            }
            Err(err) => {
                tracing::error!(bean = %object_name, class = class_name, error = %err, "bean registration failed");
                Err(err.into())
            }
        }
    }
}

/// Introspectable state behind the façade's own status bean.
#[derive(Debug, Serialize, Deserialize)]
struct ManagerStatus {
    domain: String,
}
