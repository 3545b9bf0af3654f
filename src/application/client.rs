/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the Confluence REST API
//!
//! # Example
//! ```ignore
//! use confluence_client::prelude::*;
//!
//! let client = Client::new("https://wiki.example.com", AuthMethod::token("abc"))?;
//! let hits = client.search("type=page and space=DEV", "", &["space"], 25).await?;
//! for hit in &hits.results {
//!     println!("{} ({})", hit.title, hit.url);
//! }
//! ```

use crate::application::auth::AuthMethod;
use crate::application::config::Config;
use crate::application::interfaces::{ContentService, SearchService, SpaceService};
use crate::error::AppError;
use crate::model::http::{HttpClient, decode};
use crate::model::requests::{GetContentQuery, QueryParams, SearchQuery, SpaceQuery};
use crate::model::responses::{ContentResults, SearchResults, SpaceContents, Spaces};
use crate::presentation::content::Content;
use crate::presentation::space::Space;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{Span, debug, info, warn};
use url::Url;

/// Client bound to one wiki and one authentication strategy
///
/// Immutable once built and cheap to clone; clones share the transport.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for the wiki at `location`
    ///
    /// # Arguments
    /// * `location` - Absolute base URL, e.g. `https://wiki.example.com/confluence`
    /// * `auth` - Strategy applied to every request
    ///
    /// # Returns
    /// * `Ok(Client)` - No request is sent at construction
    /// * `Err(AppError::InvalidEndpoint)` - If `location` is not an absolute http(s) URL
    pub fn new(location: &str, auth: AuthMethod) -> Result<Self, AppError> {
        Ok(Self::from_core(HttpClient::new(location, auth)?))
    }

    /// Creates a client on top of a preconfigured `reqwest` client
    pub fn with_http_client(
        location: &str,
        auth: AuthMethod,
        http_client: reqwest::Client,
    ) -> Result<Self, AppError> {
        Ok(Self::from_core(HttpClient::with_http_client(
            location,
            auth,
            http_client,
        )?))
    }

    /// Creates a client from configuration, applying the configured timeout
    ///
    /// A timeout of 0 builds a transport without a request timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let location = &config.rest_api.base_url;
        let core = match config.rest_api.request_timeout() {
            Some(timeout) => HttpClient::with_timeout(location, config.auth_method(), timeout)?,
            None => {
                warn!("Request timeout disabled for {}", location);
                HttpClient::new(location, config.auth_method())?
            }
        };
        Ok(Self::from_core(core))
    }

    /// Wraps an existing core
    pub fn from_core(http_client: HttpClient) -> Self {
        Self {
            http_client: Arc::new(http_client),
        }
    }

    /// Replaces the span the client logs in
    #[must_use]
    pub fn with_span(self, span: Span) -> Self {
        let core = Arc::unwrap_or_clone(self.http_client).with_span(span);
        Self::from_core(core)
    }

    /// Normalized API root, ending in `rest/api`
    pub fn endpoint(&self) -> &Url {
        self.http_client.endpoint()
    }

    /// Authentication strategy bound to this client
    pub fn auth(&self) -> &AuthMethod {
        self.http_client.auth()
    }

    /// Dispatch core, for requests not covered by the service traits
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Creates `content` and returns the stored version with the raw response body
    pub async fn create_content_with_body(
        &self,
        content: &Content,
    ) -> Result<(Content, Vec<u8>), AppError> {
        let url = self.http_client.url(&["content"], None)?;
        info!("Creating {} '{}'", content.content_type, content.title);
        let body = self
            .http_client
            .send_json_raw(Method::POST, url, content)
            .await?;
        let created: Content = decode(body.clone())?;
        info!("Content created with id {}", created.id);
        Ok((created, body))
    }

    /// Updates `content` and returns the stored version with the raw response body
    pub async fn update_content_with_body(
        &self,
        content: &Content,
    ) -> Result<(Content, Vec<u8>), AppError> {
        let url = self.http_client.url(&["content", content.id.as_str()], None)?;
        info!(
            "Updating content {} to version {}",
            content.id, content.version.number
        );
        let body = self
            .http_client
            .send_json_raw(Method::PUT, url, content)
            .await?;
        let updated: Content = decode(body.clone())?;
        debug!("Content {} updated", updated.id);
        Ok((updated, body))
    }
}

#[async_trait]
impl ContentService for Client {
    async fn get_content(&self, content_id: &str, expand: &[&str]) -> Result<Content, AppError> {
        let query = QueryParams::new().with_list("expand", expand);
        let url = self
            .http_client
            .url(&["content", content_id], Some(&query))?;
        debug!("Getting content: {}", content_id);
        let content: Content = self.http_client.get(url).await?;
        debug!("Content obtained: {} (version {})", content.title, content.version.number);
        Ok(content)
    }

    async fn list_content(&self, query: &GetContentQuery) -> Result<ContentResults, AppError> {
        let url = self.http_client.url(&["content"], Some(&query.to_query()))?;
        let results: ContentResults = self.http_client.get(url).await?;
        debug!("Content listed: {} results", results.len());
        Ok(results)
    }

    async fn create_content(&self, content: &Content) -> Result<Content, AppError> {
        let (created, _) = self.create_content_with_body(content).await?;
        Ok(created)
    }

    async fn update_content(&self, content: &Content) -> Result<Content, AppError> {
        let (updated, _) = self.update_content_with_body(content).await?;
        Ok(updated)
    }

    async fn delete_content(&self, content_id: &str) -> Result<(), AppError> {
        let url = self.http_client.url(&["content", content_id], None)?;
        info!("Deleting content {}", content_id);
        self.http_client.delete(url).await?;
        Ok(())
    }

    async fn get_content_children_pages(
        &self,
        content_id: &str,
        expand: &[&str],
    ) -> Result<ContentResults, AppError> {
        let query = QueryParams::new().with_list("expand", expand);
        let url = self
            .http_client
            .url(&["content", content_id, "child", "page"], Some(&query))?;
        let children: ContentResults = self.http_client.get(url).await?;
        debug!("Child pages of {}: {}", content_id, children.len());
        Ok(children)
    }

    async fn get_page_id_by_title(
        &self,
        space_key: &str,
        title: &str,
    ) -> Result<String, AppError> {
        let query = GetContentQuery::page_by_title(space_key, title);
        let results = self.list_content(&query).await?;
        match results.results.as_slice() {
            [page] => Ok(page.id.clone()),
            other => {
                debug!(
                    "{} pages titled '{}' in space {}, returning no id",
                    other.len(),
                    title,
                    space_key
                );
                Ok(String::new())
            }
        }
    }
}

#[async_trait]
impl SpaceService for Client {
    async fn get_spaces(&self) -> Result<Vec<Space>, AppError> {
        let spaces = self.get_spaces_with(&SpaceQuery::new()).await?;
        Ok(spaces.results)
    }

    async fn get_spaces_with(&self, query: &SpaceQuery) -> Result<Spaces, AppError> {
        let url = self.http_client.url(&["space"], Some(&query.to_query()))?;
        let spaces: Spaces = self.http_client.get(url).await?;
        debug!("Spaces obtained: {}", spaces.results.len());
        Ok(spaces)
    }

    async fn get_space_content(&self, space_key: &str) -> Result<SpaceContents, AppError> {
        let url = self
            .http_client
            .url(&["space", space_key, "content"], None)?;
        let contents: SpaceContents = self.http_client.get(url).await?;
        debug!(
            "Space {} content: {} pages, {} blog posts",
            space_key,
            contents.page.results.len(),
            contents.blogpost.results.len()
        );
        Ok(contents)
    }
}

#[async_trait]
impl SearchService for Client {
    async fn search(
        &self,
        cql: &str,
        cql_context: &str,
        expand: &[&str],
        limit: u32,
    ) -> Result<SearchResults, AppError> {
        let query = SearchQuery::new(cql)
            .with_cql_context(cql_context)
            .with_expand(expand)
            .with_limit(limit);
        self.search_with(&query).await
    }

    async fn search_with(&self, query: &SearchQuery) -> Result<SearchResults, AppError> {
        let url = self.http_client.url(&["search"], Some(&query.to_query()))?;
        info!("Searching: {}", query.cql);
        let results: SearchResults = self.http_client.get(url).await?;
        debug!(
            "Search returned {} of {} results",
            results.results.len(),
            results.total_size
        );
        Ok(results)
    }
}
