/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{PAGE_CONTENT_TYPE, POSTING_DAY_FORMAT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use url::form_urlencoded::byte_serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
enum QueryValue {
    Single(String),
    List(Vec<String>),
}

impl QueryValue {
    fn encode(&self) -> String {
        match self {
            QueryValue::Single(value) => encode_component(value),
            QueryValue::List(values) => values
                .iter()
                .map(|v| encode_component(v))
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    fn decoded(&self) -> String {
        match self {
            QueryValue::Single(value) => value.clone(),
            QueryValue::List(values) => values.join(","),
        }
    }
}

fn encode_component(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// Ordered query string parameters
///
/// Values are form-urlencoded. List values are encoded item by item and
/// joined with a literal `,`, which is how the API expects `expand`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Creates an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&mut self, key: &str, value: QueryValue) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Sets `key` to `value`, replacing any previous value
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, QueryValue::Single(value.into()));
        self
    }

    /// Sets `key` to the comma-joined `values`, even when `values` is empty
    pub fn with_list<S: AsRef<str>>(mut self, key: &str, values: &[S]) -> Self {
        let values = values.iter().map(|v| v.as_ref().to_string()).collect();
        self.set(key, QueryValue::List(values));
        self
    }

    /// Sets `key` only when `value` is present and not empty
    pub fn with_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.with(key, value),
            _ => self,
        }
    }

    /// Sets `key` only when `values` is not empty
    pub fn with_list_opt<S: AsRef<str>>(self, key: &str, values: &[S]) -> Self {
        if values.is_empty() {
            self
        } else {
            self.with_list(key, values)
        }
    }

    /// Sets `key` only when `value` is greater than zero
    pub fn with_positive(self, key: &str, value: u32) -> Self {
        if value > 0 {
            self.with(key, value.to_string())
        } else {
            self
        }
    }

    /// Returns the decoded value of `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.decoded())
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no parameter is set
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the parameters as `key=value&...` in insertion order
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), v.encode()))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Replaces the query of `url` with these parameters
    pub fn apply_to(&self, url: &mut Url) {
        if self.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.encode()));
        }
    }
}

/// Filters for listing content through `GET /content`
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct GetContentQuery {
    /// Content type, `page` or `blogpost`
    pub content_type: Option<String>,
    /// Space key
    pub space_key: Option<String>,
    /// Exact title
    pub title: Option<String>,
    /// Content status, e.g. `current`
    pub status: Option<String>,
    /// Day a blog post was published; only the date part is sent
    pub posting_day: Option<DateTime<Utc>>,
    /// Sub-resources to inline in the response
    pub expand: Vec<String>,
    /// Index of the first result (0 = not sent)
    pub start: u32,
    /// Page size (0 = server default)
    pub limit: u32,
}

impl GetContentQuery {
    /// Creates an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Query matching the page titled `title` in `space_key`
    pub fn page_by_title(space_key: &str, title: &str) -> Self {
        Self::new()
            .with_content_type(PAGE_CONTENT_TYPE)
            .with_space_key(space_key)
            .with_title(title)
    }

    /// Set the content type
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// Set the space key
    pub fn with_space_key(mut self, space_key: &str) -> Self {
        self.space_key = Some(space_key.to_string());
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// Set the posting day
    pub fn with_posting_day(mut self, posting_day: DateTime<Utc>) -> Self {
        self.posting_day = Some(posting_day);
        self
    }

    /// Set the expansions
    pub fn with_expand<S: AsRef<str>>(mut self, expand: &[S]) -> Self {
        self.expand = expand.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Set the start index
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Builds the query string parameters; unset fields are not sent
    pub fn to_query(&self) -> QueryParams {
        let posting_day = self
            .posting_day
            .map(|day| day.format(POSTING_DAY_FORMAT).to_string());
        QueryParams::new()
            .with_opt("type", self.content_type.as_deref())
            .with_opt("spaceKey", self.space_key.as_deref())
            .with_opt("title", self.title.as_deref())
            .with_opt("status", self.status.as_deref())
            .with_opt("postingDay", posting_day.as_deref())
            .with_list_opt("expand", self.expand.as_slice())
            .with_positive("start", self.start)
            .with_positive("limit", self.limit)
    }
}

/// Parameters for `GET /search`
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SearchQuery {
    /// CQL expression
    pub cql: String,
    /// CQL context, sent even when empty
    pub cql_context: String,
    /// Sub-resources to inline in the response
    pub expand: Vec<String>,
    /// Index of the first result (0 = not sent)
    pub start: u32,
    /// Page size (0 = server default)
    pub limit: u32,
}

impl SearchQuery {
    /// Create a query for `cql`
    pub fn new(cql: &str) -> Self {
        Self {
            cql: cql.to_string(),
            ..Default::default()
        }
    }

    /// Set the CQL context
    pub fn with_cql_context(mut self, cql_context: &str) -> Self {
        self.cql_context = cql_context.to_string();
        self
    }

    /// Set the expansions
    pub fn with_expand<S: AsRef<str>>(mut self, expand: &[S]) -> Self {
        self.expand = expand.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Set the start index
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Builds `cql`, `expand`, `cqlcontext`, then `start` and `limit` when set
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("cql", self.cql.as_str())
            .with_list("expand", self.expand.as_slice())
            .with("cqlcontext", self.cql_context.as_str())
            .with_positive("start", self.start)
            .with_positive("limit", self.limit)
    }
}

/// Filters for `GET /space`
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SpaceQuery {
    /// Restrict to these space keys
    pub space_keys: Vec<String>,
    /// Space type, `global` or `personal`
    pub space_type: Option<String>,
    /// Space status, `current` or `archived`
    pub status: Option<String>,
    /// Sub-resources to inline in the response
    pub expand: Vec<String>,
    /// Index of the first result (0 = not sent)
    pub start: u32,
    /// Page size (0 = server default)
    pub limit: u32,
}

impl SpaceQuery {
    /// Creates an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the space keys
    pub fn with_space_keys<S: AsRef<str>>(mut self, keys: &[S]) -> Self {
        self.space_keys = keys.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Set the space type
    pub fn with_space_type(mut self, space_type: &str) -> Self {
        self.space_type = Some(space_type.to_string());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// Set the expansions
    pub fn with_expand<S: AsRef<str>>(mut self, expand: &[S]) -> Self {
        self.expand = expand.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Set the start index
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Builds the query string parameters; unset fields are not sent
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_list_opt("spaceKey", self.space_keys.as_slice())
            .with_opt("type", self.space_type.as_deref())
            .with_opt("status", self.status.as_deref())
            .with_list_opt("expand", self.expand.as_slice())
            .with_positive("start", self.start)
            .with_positive("limit", self.limit)
    }
}
