//! Article entities as seen from the client side.

use serde::{Deserialize, Serialize};

/// Title and content read from the edit form at click time.
///
/// Serialized as the request body of both create and update calls, with
/// exactly these two fields. Empty strings are sent as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// An article fetched back from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Present when the listing endpoint returns it; the single-article
    /// endpoint only carries title and content.
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
}

impl Article {
    /// Returns the article's title and content as a draft, for prefilling the edit form.
    pub fn to_draft(&self) -> ArticleDraft {
        ArticleDraft::new(self.title.clone(), self.content.clone())
    }
}
