use crate::utils::json::deserialize_null_default;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Links of a space
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SpaceLinks {
    /// Browser URL, relative to the wiki base
    #[serde(deserialize_with = "deserialize_null_default")]
    pub webui: String,
    /// REST URL of the space
    #[serde(rename = "self", deserialize_with = "deserialize_null_default")]
    pub self_link: String,
}

/// Sub-resources of a space that can be expanded
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SpaceExpandable {
    /// Metadata link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub metadata: String,
    /// Icon link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub icon: String,
    /// Description link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub description: String,
    /// Home page link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub homepage: String,
}

/// A space
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Space {
    /// Numeric id
    #[serde(deserialize_with = "deserialize_null_default")]
    pub id: i64,
    /// Space key
    #[serde(deserialize_with = "deserialize_null_default")]
    pub key: String,
    /// Display name
    #[serde(deserialize_with = "deserialize_null_default")]
    pub name: String,
    /// Space type, `global` or `personal`
    #[serde(rename = "type", deserialize_with = "deserialize_null_default")]
    pub space_type: String,
    /// Links
    #[serde(rename = "_links", deserialize_with = "deserialize_null_default")]
    pub links: SpaceLinks,
    /// Expandable sub-resources
    #[serde(rename = "_expandable", deserialize_with = "deserialize_null_default")]
    pub expandable: SpaceExpandable,
}

/// Links of a content summary
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContentLinks {
    /// Browser URL
    #[serde(deserialize_with = "deserialize_null_default")]
    pub webui: String,
    /// Editor URL
    #[serde(deserialize_with = "deserialize_null_default")]
    pub edit: String,
    /// Short URL
    #[serde(deserialize_with = "deserialize_null_default")]
    pub tinyui: String,
    /// REST URL
    #[serde(rename = "self", deserialize_with = "deserialize_null_default")]
    pub self_link: String,
}

/// Sub-resources of a content summary that can be expanded
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContentExpandable {
    /// Container link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub container: String,
    /// Metadata link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub metadata: String,
    /// Operations link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub operations: String,
    /// Children link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub children: String,
    /// Restrictions link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub restrictions: String,
    /// History link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub history: String,
    /// Ancestors link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub ancestors: String,
    /// Body link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub body: String,
    /// Version link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub version: String,
    /// Descendants link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub descendants: String,
    /// Space link
    #[serde(deserialize_with = "deserialize_null_default")]
    pub space: String,
}

/// Content entry as listed under a space
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ContentSummary {
    /// Content id
    #[serde(deserialize_with = "deserialize_null_default")]
    pub id: String,
    /// Content type
    #[serde(rename = "type", deserialize_with = "deserialize_null_default")]
    pub content_type: String,
    /// Content status
    #[serde(deserialize_with = "deserialize_null_default")]
    pub status: String,
    /// Title
    #[serde(deserialize_with = "deserialize_null_default")]
    pub title: String,
    /// Position among siblings, when the server sends one
    pub extensions: serde_json::Value,
    /// Links
    #[serde(rename = "_links", deserialize_with = "deserialize_null_default")]
    pub links: ContentLinks,
    /// Expandable sub-resources
    #[serde(rename = "_expandable", deserialize_with = "deserialize_null_default")]
    pub expandable: ContentExpandable,
}
