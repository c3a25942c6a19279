//! Repository trait for the remote article API.

use crate::domain::entities::{Article, ArticleDraft};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::StatusCode;

/// Client-side interface to the `/api/articles` endpoints.
///
/// Write operations return the response status without inspecting the body.
/// They only fail when no response arrives at all.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpArticleRepository`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_http.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// `POST /api/articles` with the draft as JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Http`] if the request could not be sent.
    async fn create(&self, draft: &ArticleDraft) -> Result<StatusCode, AppError>;

    /// `PUT /api/articles/{id}` with the draft as JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Http`] if the request could not be sent,
    /// [`AppError::InvalidUrl`] if the id does not form a valid path.
    async fn update(&self, id: &str, draft: &ArticleDraft) -> Result<StatusCode, AppError>;

    /// `DELETE /api/articles/{id}`.
    ///
    /// # Errors
    ///
    /// Same as [`ArticleRepository::update`].
    async fn delete(&self, id: &str) -> Result<StatusCode, AppError>;

    /// `GET /api/articles/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnexpectedStatus`] for any non-2xx response and
    /// [`AppError::Decode`] if the body is not an article.
    async fn find_by_id(&self, id: &str) -> Result<Article, AppError>;

    /// `GET /api/articles`.
    ///
    /// # Errors
    ///
    /// Same as [`ArticleRepository::find_by_id`].
    async fn list(&self) -> Result<Vec<Article>, AppError>;
}
