//! Application layer: the form action handlers.
//!
//! Services consume the [`crate::domain::repositories::ArticleRepository`]
//! trait and the [`crate::domain::page::Page`] capability and never construct
//! either themselves.
//!
//! - [`services::form_actions::FormActionHandler`] - Delete, modify and create handlers

pub mod services;
