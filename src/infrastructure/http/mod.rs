//! HTTP client implementations of the domain repositories.

pub mod http_article_repository;

pub use http_article_repository::{ARTICLES_ENDPOINT, HttpArticleRepository};
