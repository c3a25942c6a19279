//! Services for the application layer.

pub mod form_actions;

pub use form_actions::{Completion, FormAction, FormActionHandler};
