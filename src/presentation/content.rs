/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{PAGE_CONTENT_TYPE, STORAGE_REPRESENTATION};
use crate::utils::json::deserialize_null_default;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Reference to a parent page
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContentAncestor {
    /// Parent content id
    #[serde(deserialize_with = "deserialize_null_default")]
    pub id: String,
}

/// Body in a given representation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Storage {
    /// Markup of the body
    #[serde(deserialize_with = "deserialize_null_default")]
    pub value: String,
    /// Representation of `value`, usually `storage`
    #[serde(deserialize_with = "deserialize_null_default")]
    pub representation: String,
}

/// Content body
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContentBody {
    /// Body in storage representation
    #[serde(deserialize_with = "deserialize_null_default")]
    pub storage: Storage,
}

/// Content version
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Version {
    /// Version number, incremented on every update
    #[serde(deserialize_with = "deserialize_null_default")]
    pub number: u32,
}

/// Space a piece of content belongs to
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SpaceRef {
    /// Space key
    #[serde(deserialize_with = "deserialize_null_default")]
    pub key: String,
}

impl SpaceRef {
    fn is_unset(&self) -> bool {
        self.key.is_empty()
    }
}

/// A page, blog post or comment
///
/// Used both as the request body of create/update and as the decoded
/// response. Empty `id`, `status`, `space` and `ancestors` are not sent.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Content {
    /// Content id, empty for content not created yet
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "deserialize_null_default",
    )]
    pub id: String,
    /// Content type, e.g. `page` or `blogpost`
    #[serde(rename = "type", deserialize_with = "deserialize_null_default")]
    pub content_type: String,
    /// Content status, e.g. `current`
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "deserialize_null_default",
    )]
    pub status: String,
    /// Title
    #[serde(deserialize_with = "deserialize_null_default")]
    pub title: String,
    /// Body
    #[serde(deserialize_with = "deserialize_null_default")]
    pub body: ContentBody,
    /// Version
    #[serde(deserialize_with = "deserialize_null_default")]
    pub version: Version,
    /// Space
    #[serde(
        skip_serializing_if = "SpaceRef::is_unset",
        deserialize_with = "deserialize_null_default",
    )]
    pub space: SpaceRef,
    /// Parent pages, closest last
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "deserialize_null_default")]
    pub ancestors: Vec<ContentAncestor>,
}

impl Content {
    /// New page in `space_key` with a storage-format body
    pub fn new_page(space_key: &str, title: &str, storage_value: &str) -> Self {
        Self {
            content_type: PAGE_CONTENT_TYPE.to_string(),
            title: title.to_string(),
            body: ContentBody {
                storage: Storage {
                    value: storage_value.to_string(),
                    representation: STORAGE_REPRESENTATION.to_string(),
                },
            },
            space: SpaceRef {
                key: space_key.to_string(),
            },
            ..Default::default()
        }
    }

    /// Places the content under the page `parent_id`
    pub fn with_parent(mut self, parent_id: &str) -> Self {
        self.ancestors = vec![ContentAncestor {
            id: parent_id.to_string(),
        }];
        self
    }

    /// Replaces the storage body
    pub fn with_storage_value(mut self, storage_value: &str) -> Self {
        self.body.storage.value = storage_value.to_string();
        if self.body.storage.representation.is_empty() {
            self.body.storage.representation = STORAGE_REPRESENTATION.to_string();
        }
        self
    }

    /// Increments the version number, as required before an update
    pub fn next_version(mut self) -> Self {
        self.version.number = self.version.number.saturating_add(1);
        self
    }
}
