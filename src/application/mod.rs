/// Authentication strategies
pub mod auth;
/// Client implementing the content, space and search services
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
