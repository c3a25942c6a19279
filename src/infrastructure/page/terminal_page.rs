//! Terminal-backed page used by the `article-actions` binary.

use colored::Colorize;
use dialoguer::Input;
use url::Url;

use super::Document;
use crate::domain::page::Page;
use crate::error::AppError;

/// A page whose fields are typed at the terminal.
///
/// Notices are printed in color; navigation prints the resolved URL.
#[derive(Debug, Clone)]
pub struct TerminalPage {
    document: Document,
}

impl TerminalPage {
    /// Creates an empty page at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if `location` is not an absolute URL.
    pub fn new(location: &str) -> Result<Self, AppError> {
        Ok(Self {
            document: Document::parse(location)?,
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

    /// Sets a field from `preset`, or prompts for it starting from `initial`.
    ///
    /// Empty input is accepted.
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot be read.
    pub fn with_prompted_value(
        self,
        id: &str,
        label: &str,
        preset: Option<String>,
        initial: Option<&str>,
    ) -> Result<Self, dialoguer::Error> {
        let value = match preset {
            Some(value) => value,
            None => {
                let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
                if let Some(text) = initial {
                    input = input.with_initial_text(text);
                }
                input.interact_text()?
            }
        };

        Ok(self.with_value(id, value))
    }
}

impl Page for TerminalPage {
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
        println!();
        println!("{}", format!("✅ {message}").green().bold());
    }

    fn navigate(&mut self, path: &str) {
        let location = self.document.replace_location(path);
        println!("  {} {}", "→".bright_black(), location.as_str().cyan());
        println!();
    }
}
