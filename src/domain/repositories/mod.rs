//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for talking to the article API; the
//! implementation lives in `crate::infrastructure::http`. Mock
//! implementations are generated via `mockall` for unit tests.

pub mod article_repository;

pub use article_repository::ArticleRepository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
