use crate::error::AppError;
use crate::model::requests::SearchQuery;
use crate::model::responses::SearchResults;
use async_trait::async_trait;

/// Interface for the search service
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Runs a CQL search
    ///
    /// # Arguments
    /// * `cql` - CQL expression, e.g. `type=page and space=DEV`
    /// * `cql_context` - CQL context, sent even when empty
    /// * `expand` - Sub-resources to inline in each hit
    /// * `limit` - Page size, `0` for the server default
    async fn search(
        &self,
        cql: &str,
        cql_context: &str,
        expand: &[&str],
        limit: u32,
    ) -> Result<SearchResults, AppError>;

    /// Runs a CQL search described by `query`
    async fn search_with(&self, query: &SearchQuery) -> Result<SearchResults, AppError>;
}
