//! Management bean registration and dynamic dispatch.
//!
//! This module exposes arbitrary in-process objects as management beans:
//! pairs of inspectable attributes and invocable operations registered
//! with a management server under a namespaced identifier. Two
//! registration modes are supported:
//!
//! - **Declared mode**: a per-type [`domain::ClassSpec`] declaration
//!   table carries the bean marker, per-attribute access flags, and
//!   operation bindings.
//! - **Wrapper mode**: a [`domain::BeanDescriptor`] names the attributes
//!   and operations to expose on an object whose source cannot be
//!   modified to carry a declaration table.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
