/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Typed lookups of `CONFLUENCE_*` settings in the process environment.
//!
//! A variable that is unset, not valid unicode or only whitespace counts as
//! not configured, so `CONFLUENCE_TOKEN=` in a `.env` file does not switch the
//! client to token authentication with an empty token.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Returns the raw value of `name`, or `None` when it is not configured
pub fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_env<T>(name: &str, value: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", name, value, e);
            None
        }
    }
}

/// Reads and parses `name`, falling back to `default`
///
/// # Arguments
/// * `name` - Environment variable name
/// * `default` - Value used when the variable is not configured or does not parse
pub fn get_env_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    env_value(name)
        .and_then(|value| parse_env(name, &value))
        .unwrap_or(default)
}

/// Reads and parses `name`, returning `None` when it is not configured or does not parse
pub fn get_env_or_none<T>(name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    env_value(name).and_then(|value| parse_env(name, &value))
}
