/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Confluence Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ## Usage
//!
//! ```rust
//! use confluence_client::prelude::*;
//!
//! let client = Client::new("https://wiki.example.com", AuthMethod::basic("user", "secret"))
//!     .expect("valid endpoint");
//! assert_eq!(client.endpoint().as_str(), "https://wiki.example.com/rest/api");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Confluence client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Authentication strategies
pub use crate::application::auth::{AuthMethod, BasicCredentials, SessionCookie};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client implementing all services
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::{ContentService, SearchService, SpaceService};

/// Dispatch core
pub use crate::model::http::HttpClient;

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

/// Query builders
pub use crate::model::requests::{GetContentQuery, QueryParams, SearchQuery, SpaceQuery};

/// List envelopes
pub use crate::model::responses::{
    ContentPage, ContentResults, ResultPagination, SearchResults, SpaceContents, Spaces,
};

/// Resource records
pub use crate::presentation::{
    Content, ContentAncestor, ContentBody, ContentResult, ContentSummary, Space, SpaceRef,
    Storage, Version,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};
