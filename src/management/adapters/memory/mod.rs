//! In-memory management server adapter.

mod server;

pub use server::InMemoryManagementServer;
