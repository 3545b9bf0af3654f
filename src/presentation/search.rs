use crate::presentation::content::Content;
use crate::utils::json::deserialize_null_default;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Space or container a search hit lives in
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultGlobalContainer {
    /// Container title
    #[serde(deserialize_with = "deserialize_null_default")]
    pub title: String,
    /// Container URL
    #[serde(deserialize_with = "deserialize_null_default")]
    pub display_url: String,
}

/// A single search hit
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentResult {
    /// Matched content
    #[serde(deserialize_with = "deserialize_null_default")]
    pub content: Content,
    /// Hit title, may contain highlight markers
    #[serde(deserialize_with = "deserialize_null_default")]
    pub title: String,
    /// Text excerpt around the match
    #[serde(deserialize_with = "deserialize_null_default")]
    pub excerpt: String,
    /// Relative URL of the hit
    #[serde(deserialize_with = "deserialize_null_default")]
    pub url: String,
    /// Container of the hit
    #[serde(deserialize_with = "deserialize_null_default")]
    pub result_global_container: ResultGlobalContainer,
    /// Entity type, e.g. `content` or `space`
    #[serde(deserialize_with = "deserialize_null_default")]
    pub entity_type: String,
    /// Icon CSS class
    #[serde(deserialize_with = "deserialize_null_default")]
    pub icon_css_class: String,
    /// Last modification timestamp
    #[serde(deserialize_with = "deserialize_null_default")]
    pub last_modified: String,
    /// Human readable last modification
    #[serde(deserialize_with = "deserialize_null_default")]
    pub friendly_last_modified: String,
}
