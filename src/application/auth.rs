/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authentication strategies applied to every outgoing request
//!
//! Two strategies are supported:
//! - HTTP Basic, with credentials read from a callback each time a request is sent
//! - Session token, sent as the `studio.crowd.tokenkey` cookie

use crate::constants::TOKEN_COOKIE_NAME;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, COOKIE, HeaderValue};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Username and password pair returned by a basic credential callback
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// Account username
    pub username: String,
    /// Account password or API token
    pub password: String,
}

impl BasicCredentials {
    /// Creates a new credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn header_value(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {encoded}")
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Callback invoked on every request to obtain the current basic credentials
pub type CredentialsCallback = Arc<dyn Fn() -> BasicCredentials + Send + Sync>;

/// Cookie carrying the session token
///
/// Only `name=value` travels in the request `Cookie` header; the remaining
/// attributes describe the cookie scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name
    pub name: String,
    /// Session token
    pub value: String,
    /// Host the cookie is scoped to, prefixed with a dot
    pub domain: String,
    /// Cookie path
    pub path: String,
    /// Only sent over TLS
    pub secure: bool,
    /// Not readable from scripts
    pub http_only: bool,
}

impl SessionCookie {
    /// Builds the token cookie scoped to `host`
    pub fn for_host(token: &str, host: &str) -> Self {
        Self {
            name: TOKEN_COOKIE_NAME.to_string(),
            value: token.to_string(),
            domain: format!(".{host}"),
            path: "/".to_string(),
            secure: true,
            http_only: true,
        }
    }

    /// Returns the `name=value` pair sent in the `Cookie` header
    #[must_use]
    pub fn pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

/// Authentication strategy bound to a client for its whole lifetime
#[derive(Clone)]
pub enum AuthMethod {
    /// HTTP Basic authentication, credentials read at request time
    Basic(CredentialsCallback),
    /// Session token sent as a cookie
    Token(String),
}

impl AuthMethod {
    /// Basic authentication with fixed credentials
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        let credentials = BasicCredentials::new(username, password);
        AuthMethod::Basic(Arc::new(move || credentials.clone()))
    }

    /// Basic authentication with credentials obtained from `callback` on every request
    ///
    /// Useful when the password is rotated while the client is alive.
    pub fn basic_with<F>(callback: F) -> Self
    where
        F: Fn() -> BasicCredentials + Send + Sync + 'static,
    {
        AuthMethod::Basic(Arc::new(callback))
    }

    /// Session token authentication
    pub fn token(token: impl Into<String>) -> Self {
        AuthMethod::Token(token.into())
    }

    /// Decorates `request` with credentials, in place
    ///
    /// A credential that cannot be represented as a header value is skipped;
    /// the server will then answer 401.
    pub fn apply(&self, request: &mut Request) {
        match self {
            AuthMethod::Basic(callback) => {
                let credentials = callback();
                match HeaderValue::from_str(&credentials.header_value()) {
                    Ok(mut value) => {
                        value.set_sensitive(true);
                        request.headers_mut().insert(AUTHORIZATION, value);
                    }
                    Err(e) => warn!("Skipping basic authentication header: {}", e),
                }
            }
            AuthMethod::Token(token) => {
                let cookie = SessionCookie::for_host(token, &host_of(request));
                let pair = cookie.pair();
                let header = match request.headers().get(COOKIE).and_then(|v| v.to_str().ok()) {
                    Some(existing) if !existing.is_empty() => format!("{existing}; {pair}"),
                    _ => pair,
                };
                match HeaderValue::from_str(&header) {
                    Ok(mut value) => {
                        value.set_sensitive(true);
                        request.headers_mut().insert(COOKIE, value);
                    }
                    Err(e) => warn!("Skipping session cookie {}: {}", cookie.name, e),
                }
            }
        }
    }

    /// Short name of the strategy, used in logs
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            AuthMethod::Basic(_) => "basic",
            AuthMethod::Token(_) => "token",
        }
    }
}

impl fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMethod::Basic(_) => f.write_str("AuthMethod::Basic(<callback>)"),
            AuthMethod::Token(_) => f.write_str("AuthMethod::Token(***)"),
        }
    }
}

// host[:port], as sent in the Host header
fn host_of(request: &Request) -> String {
    let url = request.url();
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
