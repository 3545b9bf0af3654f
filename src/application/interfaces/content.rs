use crate::error::AppError;
use crate::model::requests::GetContentQuery;
use crate::model::responses::ContentResults;
use crate::presentation::content::Content;
use async_trait::async_trait;

/// Interface for the content service
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Gets a piece of content by id
    ///
    /// # Arguments
    /// * `content_id` - Content id
    /// * `expand` - Sub-resources to inline, e.g. `body.storage`, `version`
    async fn get_content(&self, content_id: &str, expand: &[&str]) -> Result<Content, AppError>;

    /// Lists content matching `query`
    async fn list_content(&self, query: &GetContentQuery) -> Result<ContentResults, AppError>;

    /// Creates `content` and returns the stored version
    async fn create_content(&self, content: &Content) -> Result<Content, AppError>;

    /// Updates the content identified by `content.id`
    ///
    /// The version number must already be incremented, see [`Content::next_version`].
    async fn update_content(&self, content: &Content) -> Result<Content, AppError>;

    /// Deletes a piece of content
    async fn delete_content(&self, content_id: &str) -> Result<(), AppError>;

    /// Lists the child pages of a piece of content
    async fn get_content_children_pages(
        &self,
        content_id: &str,
        expand: &[&str],
    ) -> Result<ContentResults, AppError>;

    /// Looks a page up by space and title
    ///
    /// # Returns
    /// * The id of the page when exactly one page matches
    /// * An empty string when no page or several pages match
    async fn get_page_id_by_title(&self, space_key: &str, title: &str)
    -> Result<String, AppError>;
}
