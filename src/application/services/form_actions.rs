//! Click handlers for the create, modify and delete buttons of the article pages.

use std::sync::Arc;

use reqwest::StatusCode;
use tracing::{info, warn};

use crate::domain::entities::ArticleDraft;
use crate::domain::page::{ID_QUERY_PARAM, Page, element};
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

pub const DELETED_NOTICE: &str = "Article deleted.";
pub const UPDATED_NOTICE: &str = "Article updated.";
pub const CREATED_NOTICE: &str = "Article created.";

/// Listing page shown after create and delete.
pub const LIST_PATH: &str = "/articles";

/// One of the three buttons a page may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormAction {
    Delete,
    Modify,
    Create,
}

impl FormAction {
    pub const ALL: [FormAction; 3] = [FormAction::Delete, FormAction::Modify, FormAction::Create];

    /// Id of the button element that triggers this action.
    pub fn button_id(self) -> &'static str {
        match self {
            FormAction::Delete => element::DELETE_BUTTON,
            FormAction::Modify => element::MODIFY_BUTTON,
            FormAction::Create => element::CREATE_BUTTON,
        }
    }

    /// Returns the actions whose button exists on the page.
    ///
    /// A page without any of the buttons yields an empty list; that is not an error.
    pub fn attach<P: Page>(page: &P) -> Vec<FormAction> {
        let attached: Vec<_> = Self::ALL
            .into_iter()
            .filter(|action| page.has_element(action.button_id()))
            .collect();

        tracing::debug!(page = %page.location(), ?attached, "Attached form handlers");
        attached
    }
}

/// Outcome of a handler run, after notice and navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub action: FormAction,
    /// Response status, reported but never branched on.
    pub status: StatusCode,
    pub redirect: String,
}

/// Runs the form actions against an [`ArticleRepository`].
///
/// Stateless: every click reads the page afresh and issues its own request,
/// so repeated clicks produce repeated requests.
pub struct FormActionHandler<R: ArticleRepository> {
    repository: Arc<R>,
}

impl<R: ArticleRepository> FormActionHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Runs the handler bound to `action`.
    pub async fn click<P: Page>(
        &self,
        action: FormAction,
        page: &mut P,
    ) -> Result<Completion, AppError> {
        match action {
            FormAction::Delete => self.delete(page).await,
            FormAction::Modify => self.update(page).await,
            FormAction::Create => self.create(page).await,
        }
    }

    /// Deletes the article named by the `article-id` field, then goes back to the list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingElement`] if the page has no `article-id`
    /// field and [`AppError::Http`] if no response arrived. In both cases
    /// neither notice nor navigation happens.
    pub async fn delete<P: Page>(&self, page: &mut P) -> Result<Completion, AppError> {
        let id = read_element(page, element::ARTICLE_ID)?;

        let status = self.repository.delete(&id).await?;

        Ok(finish(
            page,
            FormAction::Delete,
            status,
            DELETED_NOTICE,
            LIST_PATH.to_string(),
        ))
    }

    /// Sends the form's title and content for the article named by the `id`
    /// query parameter, then opens that article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingQueryParam`] if the location has no `id`,
    /// [`AppError::MissingElement`] if a field is absent and
    /// [`AppError::Http`] if no response arrived.
    pub async fn update<P: Page>(&self, page: &mut P) -> Result<Completion, AppError> {
        let id = page
            .query_param(ID_QUERY_PARAM)
            .ok_or_else(|| AppError::missing_query_param(ID_QUERY_PARAM))?;
        let draft = read_draft(page)?;

        let status = self.repository.update(&id, &draft).await?;

        Ok(finish(
            page,
            FormAction::Modify,
            status,
            UPDATED_NOTICE,
            format!("{LIST_PATH}/{id}"),
        ))
    }

    /// Creates an article from the form's title and content, then goes back to the list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingElement`] if a field is absent and
    /// [`AppError::Http`] if no response arrived.
    pub async fn create<P: Page>(&self, page: &mut P) -> Result<Completion, AppError> {
        let draft = read_draft(page)?;

        let status = self.repository.create(&draft).await?;

        Ok(finish(
            page,
            FormAction::Create,
            status,
            CREATED_NOTICE,
            LIST_PATH.to_string(),
        ))
    }
}

fn read_element<P: Page>(page: &P, id: &str) -> Result<String, AppError> {
    page.element_value(id)
        .ok_or_else(|| AppError::missing_element(id))
}

fn read_draft<P: Page>(page: &P) -> Result<ArticleDraft, AppError> {
    Ok(ArticleDraft {
        title: read_element(page, element::TITLE)?,
        content: read_element(page, element::CONTENT)?,
    })
}

/// Notifies and navigates once a response has arrived, whatever its status.
fn finish<P: Page>(
    page: &mut P,
    action: FormAction,
    status: StatusCode,
    notice: &str,
    redirect: String,
) -> Completion {
    if status.is_success() {
        info!(?action, %status, %redirect, "Form action completed");
    } else {
        warn!(?action, %status, %redirect, "Form action got a non-success response");
    }

    page.alert(notice);
    page.navigate(&redirect);

    Completion {
        action,
        status,
        redirect,
    }
}
