//! Unit tests for the management module.

mod adapter_tests;
mod domain_tests;
mod introspection_tests;
mod support;
