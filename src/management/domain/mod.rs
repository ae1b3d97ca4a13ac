//! Domain model for management bean metadata and declarations.
//!
//! The domain layer models the metadata published for a registered bean
//! (attribute and operation descriptions), the declaration structures a
//! caller builds to drive registration, and the value-kind vocabulary
//! used for type filtering and operation signatures. All infrastructure
//! concerns are kept outside the domain boundary.

mod attribute;
mod class_spec;
mod descriptor;
mod info;
mod kind;
mod name;
mod operation;

pub use attribute::{Attribute, AttributeList, AttributeMetadata};
pub use class_spec::{
    AttributeSpec, BeanMarker, ClassSpec, Managed, OperationBinding, OperationFailure,
    OperationHandler, OperationSpec, ParamSpec,
};
pub use descriptor::BeanDescriptor;
pub use info::BeanInfo;
pub use kind::{ParseValueKindError, ValueKind};
pub use name::ObjectName;
pub use operation::{OperationMetadata, ParamMetadata};
