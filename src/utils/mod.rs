/// Module containing typed environment variable helpers
pub mod config;
/// Module containing the JSON compatibility shim for storage-format bodies
pub mod json;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use json::*;
pub use logger::*;
