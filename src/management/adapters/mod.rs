//! Adapter implementations for the management ports.

mod bean_adapter;
pub mod introspection;
pub mod memory;

pub use bean_adapter::BeanAdapter;
