//! [`Page`](crate::domain::page::Page) implementations.
//!
//! - [`InMemoryPage`] - Headless page that records notices and navigations
//! - [`TerminalPage`] - Page backed by the terminal: prompts, colored notices

mod in_memory_page;
mod terminal_page;

pub use in_memory_page::InMemoryPage;
pub use terminal_page::TerminalPage;

use std::collections::HashMap;
use url::Url;

use crate::error::AppError;

/// Location plus element values, shared by both page kinds.
#[derive(Debug, Clone)]
struct Document {
    location: Url,
    values: HashMap<String, String>,
}

impl Document {
    fn parse(location: &str) -> Result<Self, AppError> {
        Ok(Self {
            location: Url::parse(location)?,
            values: HashMap::new(),
        })
    }

    fn set(&mut self, id: &str, value: impl Into<String>) {
        self.values.insert(id.to_string(), value.into());
    }

    fn has(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    fn value(&self, id: &str) -> Option<String> {
        self.values.get(id).cloned()
    }

    /// Replaces the location with `path` resolved against it.
    fn replace_location(&mut self, path: &str) -> &Url {
        match self.location.join(path) {
            Ok(next) => self.location = next,
            Err(e) => tracing::warn!(path, error = %e, "Ignoring navigation to unparsable path"),
        }
        &self.location
    }
}
