//! Vitrine: expose in-process objects as management beans.
//!
//! Vitrine maps arbitrary application objects onto a uniform
//! attribute/operation contract and registers them with a management
//! server, so that an external console or in-process diagnostic surface
//! can inspect and drive them at runtime.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: bean metadata, declaration specs, and descriptors with
//!   no infrastructure dependencies
//! - **Ports**: abstract trait interfaces (`DynamicBean`,
//!   `ManagementServer`)
//! - **Adapters**: concrete implementations (serde-based introspection,
//!   the in-memory management server)
//! - **Services**: the [`management::services::BeanManager`]
//!   registration façade
//!
//! # Modules
//!
//! - [`management`]: bean metadata, the dynamic dispatch contract, and
//!   the registration façade

pub mod management;
