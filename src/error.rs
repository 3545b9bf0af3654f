/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type returned by every fallible operation of the crate.
//!
//! Status-classification errors and decode errors keep the raw response body
//! so callers can log or parse server-side detail without a second request.

use std::error::Error;
use std::fmt;

/// Errors produced while building, sending or decoding Confluence requests
#[derive(Debug)]
pub enum AppError {
    /// The base location is not a well-formed absolute URL
    InvalidEndpoint(String),
    /// Connection, DNS, TLS or timeout failure reported by the transport
    Transport(reqwest::Error),
    /// The response body could not be read after the connection succeeded
    BodyRead(reqwest::Error),
    /// The server answered 401 Unauthorized
    AuthenticationFailed {
        /// Raw response body
        body: Vec<u8>,
    },
    /// The server answered 503 Service Unavailable
    ServiceUnavailable {
        /// Literal status text, e.g. `503 Service Unavailable`
        status: String,
        /// Raw response body
        body: Vec<u8>,
    },
    /// The server answered 500 Internal Server Error
    InternalServerError {
        /// Literal status text
        status: String,
        /// Raw response body
        body: Vec<u8>,
    },
    /// The server answered with a status the client does not classify
    UnknownStatus {
        /// Literal status text, e.g. `404 Not Found`
        status: String,
        /// Raw response body
        body: Vec<u8>,
    },
    /// The response body does not match the expected JSON shape
    Decode {
        /// Name of the type the body was decoded into
        target: &'static str,
        /// Underlying JSON error
        source: serde_json::Error,
        /// Raw response body
        body: Vec<u8>,
    },
    /// A request body could not be serialized to JSON
    Serialization(serde_json::Error),
}

impl AppError {
    /// Returns the raw response body carried by the error, if any
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            AppError::AuthenticationFailed { body }
            | AppError::ServiceUnavailable { body, .. }
            | AppError::InternalServerError { body, .. }
            | AppError::UnknownStatus { body, .. }
            | AppError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns the response body as lossy UTF-8 text, if any
    #[must_use]
    pub fn body_text(&self) -> Option<String> {
        self.body()
            .map(|body| String::from_utf8_lossy(body).into_owned())
    }

    /// Returns `true` when the error comes from status classification
    #[must_use]
    pub fn is_status_error(&self) -> bool {
        matches!(
            self,
            AppError::AuthenticationFailed { .. }
                | AppError::ServiceUnavailable { .. }
                | AppError::InternalServerError { .. }
                | AppError::UnknownStatus { .. }
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidEndpoint(msg) => write!(f, "invalid endpoint: {msg}"),
            AppError::Transport(e) => write!(f, "transport error: {e}"),
            AppError::BodyRead(e) => write!(f, "failed to read response body: {e}"),
            AppError::AuthenticationFailed { .. } => write!(f, "authentication failed"),
            AppError::ServiceUnavailable { status, .. } => {
                write!(f, "service is not available ({status})")
            }
            AppError::InternalServerError { status, .. } => {
                write!(f, "internal server error: {status}")
            }
            AppError::UnknownStatus { status, .. } => {
                write!(f, "unknown response status {status}")
            }
            AppError::Decode { target, source, .. } => {
                write!(f, "failed to decode {target}: {source}")
            }
            AppError::Serialization(e) => write!(f, "serialization error: {e}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Transport(e) | AppError::BodyRead(e) => Some(e),
            AppError::Decode { source, .. } => Some(source),
            AppError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Transport(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Serialization(error)
    }
}

impl From<url::ParseError> for AppError {
    fn from(error: url::ParseError) -> Self {
        AppError::InvalidEndpoint(error.to_string())
    }
}
