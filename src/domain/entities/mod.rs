//! Core domain entities.
//!
//! - [`ArticleDraft`] - Transient form values sent on create and update
//! - [`Article`] - An article read back from the API

pub mod article;

pub use article::{Article, ArticleDraft};
