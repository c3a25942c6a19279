//! Domain layer: article entities, the page capability and the API contract.
//!
//! - [`entities`] - Article draft and article read models
//! - [`page`] - The [`page::Page`] capability handlers read from and act on
//! - [`repositories`] - The [`repositories::ArticleRepository`] trait
//!
//! Nothing here depends on reqwest's client, the terminal or axum; those
//! live in [`crate::infrastructure`].

pub mod entities;
pub mod page;
pub mod repositories;
