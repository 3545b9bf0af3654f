/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Confluence Client
//!
//! A thin async client for the Confluence REST API (`/rest/api`): content,
//! spaces and search.
//!
//! Every operation is a single request/response exchange. The [`Client`]
//! builds the endpoint URL, serializes the body when needed, applies the
//! configured [`AuthMethod`], sends the request through one dispatch
//! primitive and decodes the JSON response into a typed record.
//!
//! ## Example
//!
//! ```ignore
//! use confluence_client::prelude::*;
//!
//! let client = Client::new("https://wiki.example.com", AuthMethod::basic("user", "secret"))?;
//! let page = client.get_content("123", &["body.storage", "version"]).await?;
//! println!("{}", page.title);
//! ```
//!
//! Pagination is not traversed for you: list shapes expose `start`, `limit`
//! and `size`, and callers issue the next request themselves.
//!
//! [`Client`]: application::client::Client
//! [`AuthMethod`]: application::auth::AuthMethod

/// Client, authentication, configuration and service traits
pub mod application;

/// Fixed API values
pub mod constants;

/// Error type shared by the whole crate
pub mod error;

/// HTTP dispatch core, request queries and response envelopes
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Resource records mirroring the remote JSON shapes
pub mod presentation;

/// Helpers for configuration, logging and JSON output
pub mod utils;

/// Crate version as reported by Cargo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
