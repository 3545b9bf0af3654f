/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! List envelopes returned by the REST API.
//!
//! Every list carries `start`, `limit` and `size`; following the next page is
//! left to the caller.

use crate::presentation::content::Content;
use crate::presentation::search::ContentResult;
use crate::presentation::space::{ContentSummary, Space};
use crate::utils::json::deserialize_null_default;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Pagination metadata of a list response
#[derive(Debug, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ResultPagination {
    /// Index of the first returned result
    #[serde(deserialize_with = "deserialize_null_default")]
    pub start: u32,
    /// Requested page size
    #[serde(deserialize_with = "deserialize_null_default")]
    pub limit: u32,
    /// Number of results in this page
    #[serde(deserialize_with = "deserialize_null_default")]
    pub size: u32,
}

impl ResultPagination {
    /// Returns true if this page is full, so another page may follow
    #[must_use]
    pub fn may_have_more(&self) -> bool {
        self.limit > 0 && self.size >= self.limit
    }

    /// Start index of the next page
    #[must_use]
    pub fn next_start(&self) -> u32 {
        self.start.saturating_add(self.size)
    }
}

/// Content listing, used by `/content` and `/content/{id}/child/page`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContentResults {
    /// Pagination metadata
    #[serde(flatten)]
    pub pagination: ResultPagination,
    /// Content in this page
    #[serde(deserialize_with = "deserialize_null_default")]
    pub results: Vec<Content>,
}

impl ContentResults {
    /// Returns the number of results in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the page holds no result
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns an iterator over the results
    pub fn iter(&self) -> impl Iterator<Item = &Content> {
        self.results.iter()
    }
}

/// Links of the space listing
#[derive(Debug, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SpacesLinks {
    /// REST URL of this page
    #[serde(rename = "self", deserialize_with = "deserialize_null_default")]
    pub self_link: String,
    /// Wiki base URL
    #[serde(deserialize_with = "deserialize_null_default")]
    pub base: String,
    /// Context path
    #[serde(deserialize_with = "deserialize_null_default")]
    pub context: String,
}

/// Response of `GET /space`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Spaces {
    /// Spaces in this page
    #[serde(deserialize_with = "deserialize_null_default")]
    pub results: Vec<Space>,
    /// Pagination metadata
    #[serde(flatten)]
    pub pagination: ResultPagination,
    /// Links
    #[serde(rename = "_links", deserialize_with = "deserialize_null_default")]
    pub links: SpacesLinks,
}

/// Links of a content page
#[derive(Debug, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PageLinks {
    /// REST URL of this page
    #[serde(rename = "self", deserialize_with = "deserialize_null_default")]
    pub self_link: String,
}

/// One page of content of a given type inside a space
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ContentPage {
    /// Content in this page
    #[serde(deserialize_with = "deserialize_null_default")]
    pub results: Vec<ContentSummary>,
    /// Pagination metadata
    #[serde(flatten)]
    pub pagination: ResultPagination,
    /// Links
    #[serde(rename = "_links", deserialize_with = "deserialize_null_default")]
    pub links: PageLinks,
}

/// Base links of the space content response
#[derive(Debug, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BaseLinks {
    /// Wiki base URL
    #[serde(deserialize_with = "deserialize_null_default")]
    pub base: String,
    /// Context path
    #[serde(deserialize_with = "deserialize_null_default")]
    pub context: String,
}

/// Response of `GET /space/{key}/content`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SpaceContents {
    /// Pages of the space
    #[serde(deserialize_with = "deserialize_null_default")]
    pub page: ContentPage,
    /// Blog posts of the space
    #[serde(deserialize_with = "deserialize_null_default")]
    pub blogpost: ContentPage,
    /// Links
    #[serde(rename = "_links", deserialize_with = "deserialize_null_default")]
    pub links: BaseLinks,
}

/// Response of `GET /search`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResults {
    /// Pagination metadata
    #[serde(flatten)]
    pub pagination: ResultPagination,
    /// Hits in this page
    #[serde(deserialize_with = "deserialize_null_default")]
    pub results: Vec<ContentResult>,
    /// Number of hits across all pages
    #[serde(deserialize_with = "deserialize_null_default")]
    pub total_size: u32,
    /// CQL the server actually ran
    #[serde(deserialize_with = "deserialize_null_default")]
    pub cql_query: String,
    /// Server-side search time in milliseconds
    #[serde(alias = "SearchDuration", deserialize_with = "deserialize_null_default")]
    pub search_duration: u64,
}
