//! Page capability: the part of a browser document the form handlers touch.
//!
//! Handlers never reach for global state. Everything they read (element
//! values, the location's query string) and everything they do besides the
//! HTTP call (the blocking notice, the navigation) goes through [`Page`].

use url::Url;

/// Element ids used by the article pages.
pub mod element {
    pub const ARTICLE_ID: &str = "article-id";
    pub const TITLE: &str = "title";
    pub const CONTENT: &str = "content";

    pub const DELETE_BUTTON: &str = "delete-btn";
    pub const MODIFY_BUTTON: &str = "modify-btn";
    pub const CREATE_BUTTON: &str = "create-btn";
}

/// Query parameter carrying the article id on the edit page.
pub const ID_QUERY_PARAM: &str = "id";

pub trait Page: Send {
    /// Current location of the page, e.g. `http://localhost:8080/new-article?id=7`.
    fn location(&self) -> &Url;

    /// Returns true if an element with this id exists on the page.
    fn has_element(&self, id: &str) -> bool;

    /// Value of an input element, `None` if the element does not exist.
    fn element_value(&self, id: &str) -> Option<String>;

    /// Shows a notice to the user and returns once it has been acknowledged.
    fn alert(&mut self, message: &str);

    /// Replaces the current location with `path`, resolved against the page origin.
    fn navigate(&mut self, path: &str);

    /// First value of a query parameter of the current location.
    fn query_param(&self, name: &str) -> Option<String> {
        self.location()
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}
