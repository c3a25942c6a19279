//! Infrastructure layer for external integrations.
//!
//! - [`http`] - reqwest client for the article API
//! - [`page`] - Page implementations (in-memory and terminal)

pub mod http;
pub mod page;
