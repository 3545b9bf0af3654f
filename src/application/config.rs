use crate::application::auth::AuthMethod;
use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};

/// Environment variable holding the wiki base location
pub const ENV_BASE_URL: &str = "CONFLUENCE_BASE_URL";
/// Environment variable holding the basic auth username
pub const ENV_USERNAME: &str = "CONFLUENCE_USERNAME";
/// Environment variable holding the basic auth password or API token
pub const ENV_PASSWORD: &str = "CONFLUENCE_PASSWORD";
/// Environment variable holding the session token
pub const ENV_TOKEN: &str = "CONFLUENCE_TOKEN";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "CONFLUENCE_TIMEOUT";

#[derive(DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the Confluence REST API
pub struct Credentials {
    /// Username for basic authentication
    pub username: String,
    /// Password or API token for basic authentication
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Session token; when present it takes precedence over basic authentication
    #[serde(skip_serializing, default)]
    pub token: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base location of the wiki, without the `rest/api` suffix
    pub base_url: String,
    /// Timeout in seconds applied to the transport, 0 disables it
    pub timeout: u64,
}

impl RestApiConfig {
    /// Returns the request timeout, or `None` when `timeout` is 0
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Confluence client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default(ENV_BASE_URL, String::from("http://localhost:8090"));
        let username = get_env_or_default(ENV_USERNAME, String::new());
        let password = get_env_or_default(ENV_PASSWORD, String::new());
        let token: Option<String> = get_env_or_none(ENV_TOKEN);

        if token.is_none() && username.is_empty() {
            error!(
                "Neither {} nor {} found in environment variables or .env file",
                ENV_TOKEN, ENV_USERNAME
            );
        }

        Config {
            credentials: Credentials {
                username,
                password,
                token,
            },
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default(ENV_TIMEOUT, DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Returns the authentication strategy described by the credentials
    ///
    /// A configured token wins over username and password.
    #[must_use]
    pub fn auth_method(&self) -> AuthMethod {
        match &self.credentials.token {
            Some(token) => AuthMethod::token(token.clone()),
            None => AuthMethod::basic(
                self.credentials.username.clone(),
                self.credentials.password.clone(),
            ),
        }
    }
}
