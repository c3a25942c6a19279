use url::Url;

use super::Document;
use crate::domain::page::Page;
use crate::error::AppError;

/// A page without a user: element values are set up front, notices and
/// navigations are recorded in order.
///
/// Buttons are elements with an empty value.
#[derive(Debug, Clone)]
pub struct InMemoryPage {
    document: Document,
    alerts: Vec<String>,
    navigations: Vec<String>,
}

impl InMemoryPage {
    /// Creates an empty page at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if `location` is not an absolute URL.
    pub fn new(location: &str) -> Result<Self, AppError> {
        Ok(Self {
            document: Document::parse(location)?,
            alerts: Vec::new(),
            navigations: Vec::new(),
        })
    }

    /// Adds an element without a value, such as a button.
    pub fn with_element(mut self, id: &str) -> Self {
        self.document.set(id, "");
        self
    }

    pub fn with_value(mut self, id: &str, value: impl Into<String>) -> Self {
        self.document.set(id, value);
        self
    }

    /// Changes an input value, as a user typing into the field would.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        self.document.set(id, value);
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Paths passed to [`Page::navigate`], in order.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }
}

impl Page for InMemoryPage {
    fn location(&self) -> &Url {
        &self.document.location
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.has(id)
    }

    fn element_value(&self, id: &str) -> Option<String> {
        self.document.value(id)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, path: &str) {
        self.navigations.push(path.to_string());
        self.document.replace_location(path);
    }
}
