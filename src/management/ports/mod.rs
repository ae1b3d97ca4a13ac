//! Port contracts for dynamic dispatch and the management server.

mod dynamic_bean;
mod server;

pub use dynamic_bean::{DynamicBean, DynamicBeanError, DynamicBeanResult};
pub use server::{BeanRegistration, ManagementServer, ManagementServerResult, RegistrationError};
