//! Orchestration services for bean registration.

mod manager;

pub use manager::{BeanManager, DEFAULT_DOMAIN, RegisterError, RegisterResult};
