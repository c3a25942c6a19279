//! Wire shapes of the article endpoints.

use serde::Deserialize;

use crate::domain::entities::Article;

/// Body of `GET /api/articles/{id}` and element of `GET /api/articles`.
///
/// The API only guarantees `title` and `content`; `id` is accepted when the
/// server includes it.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleResponse {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
}

impl From<ArticleResponse> for Article {
    fn from(response: ArticleResponse) -> Self {
        Self {
            id: response.id,
            title: response.title,
            content: response.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_without_id() {
        let response: ArticleResponse =
            serde_json::from_str(r#"{"title":"T","content":"C"}"#).unwrap();
        let article = Article::from(response);

        assert_eq!(article.id, None);
        assert_eq!(article.title, "T");
        assert_eq!(article.content, "C");
    }

    #[test]
    fn test_list_with_ids_and_extra_fields() {
        let body = r#"[
            {"id": 1, "title": "a", "content": "x", "createdAt": "2024-01-01T00:00:00"},
            {"id": 2, "title": "b", "content": "y"}
        ]"#;
        let list: Vec<ArticleResponse> = serde_json::from_str(body).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, Some(2));
    }

    #[test]
    fn test_missing_content_is_rejected() {
        let result = serde_json::from_str::<ArticleResponse>(r#"{"title":"T"}"#);
        assert!(result.is_err());
    }
}
