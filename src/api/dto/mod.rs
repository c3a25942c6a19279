//! Data Transfer Objects for the article API's responses.
//!
//! Request bodies are domain types serialized directly
//! (see [`crate::domain::entities::ArticleDraft`]).

pub mod article;
