use crate::error::AppError;
use crate::model::requests::SpaceQuery;
use crate::model::responses::{SpaceContents, Spaces};
use crate::presentation::space::Space;
use async_trait::async_trait;

/// Interface for the space service
#[async_trait]
pub trait SpaceService: Send + Sync {
    /// Gets the first page of spaces visible to the user
    async fn get_spaces(&self) -> Result<Vec<Space>, AppError>;

    /// Gets one page of spaces matching `query`, with pagination metadata
    async fn get_spaces_with(&self, query: &SpaceQuery) -> Result<Spaces, AppError>;

    /// Gets the pages and blog posts of a space
    async fn get_space_content(&self, space_key: &str) -> Result<SpaceContents, AppError>;
}
