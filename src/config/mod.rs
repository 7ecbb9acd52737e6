//! Runtime configuration.

pub mod server;

pub use server::ServerConfig;
