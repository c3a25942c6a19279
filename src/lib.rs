//! # Article Actions
//!
//! Client for an article-management REST API: the create, modify and delete
//! actions of the article pages, each issuing one request and then notifying
//! the user and navigating to a follow-up page.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Article entities, the [`domain::page::Page`]
//!   capability and the [`domain::repositories::ArticleRepository`] contract
//! - **Application Layer** ([`application`]) - The form action handlers
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest client, in-memory and terminal pages
//! - **API DTOs** ([`api`]) - Wire shapes of the article endpoints
//!
//! ## Endpoints
//!
//! | Action | Request | Then |
//! |--------|---------|------|
//! | Delete | `DELETE /api/articles/{id}` | navigate to `/articles` |
//! | Modify | `PUT /api/articles/{id}` with `{title, content}` | navigate to `/articles/{id}` |
//! | Create | `POST /api/articles` with `{title, content}` | navigate to `/articles` |
//!
//! The notice and navigation follow any response, whatever its status. Only a
//! request that gets no response at all is reported as an error.
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for binaries
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Completion, FormAction, FormActionHandler};
    pub use crate::domain::entities::{Article, ArticleDraft};
    pub use crate::domain::page::{Page, element};
    pub use crate::domain::repositories::ArticleRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::HttpArticleRepository;
    pub use crate::infrastructure::page::{InMemoryPage, TerminalPage};
}
