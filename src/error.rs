//! Error type shared by the article client, the page capability and the handlers.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A handler tried to read an element that is not on the page.
    #[error("Element '#{0}' not found on page")]
    MissingElement(String),

    #[error("Query parameter '{0}' not present in page location")]
    MissingQueryParam(String),

    /// Only raised by read operations; form actions never branch on status.
    #[error("Unexpected status {status} from {method} {path}")]
    UnexpectedStatus {
        method: &'static str,
        path: String,
        status: StatusCode,
    },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AppError {
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement(id.into())
    }

    pub fn missing_query_param(name: impl Into<String>) -> Self {
        Self::MissingQueryParam(name.into())
    }

    /// Returns true if the error happened before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}
