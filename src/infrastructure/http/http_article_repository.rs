//! reqwest implementation of the article repository.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::api::dto::article::ArticleResponse;
use crate::domain::entities::{Article, ArticleDraft};
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

/// Collection endpoint; single articles live at `{ARTICLES_ENDPOINT}/{id}`.
pub const ARTICLES_ENDPOINT: &str = "/api/articles";

/// Talks to the article API over HTTP.
///
/// Paths are joined onto `base_url` the way a browser resolves an absolute
/// path against the page origin, so any path on `base_url` is replaced.
/// No timeout and no retry are configured.
#[derive(Debug, Clone)]
pub struct HttpArticleRepository {
    client: Client,
    base_url: Url,
}

impl HttpArticleRepository {
    /// Creates a repository with a default reqwest client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Http`] if the TLS backend cannot be initialized.
    pub fn new(base_url: Url) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Creates a repository sharing an existing client.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        Ok(self.base_url.join(path)?)
    }

    fn article_path(id: &str) -> String {
        format!("{ARTICLES_ENDPOINT}/{id}")
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        info!(method = "GET", %path, %status, "Article API responded");

        if !status.is_success() {
            return Err(AppError::UnexpectedStatus {
                method: "GET",
                path: path.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ArticleRepository for HttpArticleRepository {
    async fn create(&self, draft: &ArticleDraft) -> Result<StatusCode, AppError> {
        let url = self.endpoint(ARTICLES_ENDPOINT)?;

        let status = self.client.post(url).json(draft).send().await?.status();
        info!(method = "POST", path = ARTICLES_ENDPOINT, %status, "Article API responded");

        Ok(status)
    }

    async fn update(&self, id: &str, draft: &ArticleDraft) -> Result<StatusCode, AppError> {
        let path = Self::article_path(id);
        let url = self.endpoint(&path)?;

        let status = self.client.put(url).json(draft).send().await?.status();
        info!(method = "PUT", %path, %status, "Article API responded");

        Ok(status)
    }

    async fn delete(&self, id: &str) -> Result<StatusCode, AppError> {
        let path = Self::article_path(id);
        let url = self.endpoint(&path)?;

        let status = self.client.delete(url).send().await?.status();
        info!(method = "DELETE", %path, %status, "Article API responded");

        Ok(status)
    }

    async fn find_by_id(&self, id: &str) -> Result<Article, AppError> {
        let response: ArticleResponse = self.fetch(&Self::article_path(id)).await?;
        Ok(response.into())
    }

    async fn list(&self) -> Result<Vec<Article>, AppError> {
        let responses: Vec<ArticleResponse> = self.fetch(ARTICLES_ENDPOINT).await?;
        Ok(responses.into_iter().map(Article::from).collect())
    }
}
