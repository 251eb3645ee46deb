//! Content client - listing, publishing and deleting articles.

use std::sync::Arc;

use thiserror::Error;

use press_core::domain::{ContentItem, NewContent, Route};
use press_core::ports::{Confirmation, Navigator, PressApi};
use press_core::{ApiError, ValidationError};

use crate::messages;
use crate::session::SessionStore;

/// Content operation failures, already phrased for the user.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The backend rejected the session. Local state has been cleared and
    /// navigation to the landing page requested.
    #[error("Session expired")]
    SessionExpired,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Rejected(String),

    #[error("Could not connect to the server")]
    Connection,

    #[error("Unexpected response from the server")]
    Malformed,
}

/// What happened to a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    Deleted,
}

#[derive(Clone)]
pub struct ContentClient {
    api: Arc<dyn PressApi>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    confirmation: Arc<dyn Confirmation>,
}

impl ContentClient {
    pub fn new(
        api: Arc<dyn PressApi>,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        confirmation: Arc<dyn Confirmation>,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            confirmation,
        }
    }

    /// Every published article. An empty list is a success.
    pub async fn fetch_public_content(&self) -> Result<Vec<ContentItem>, ContentError> {
        self.api
            .list_content(None, None)
            .await
            .map_err(|e| self.classify(e, messages::LOAD_FAILED, false))
    }

    /// Articles owned by `user_id`, fetched with the session header.
    pub async fn fetch_user_content(
        &self,
        user_id: &str,
        session_id: &str,
    ) -> Result<Vec<ContentItem>, ContentError> {
        self.api
            .list_content(Some(user_id), Some(session_id))
            .await
            .map_err(|e| self.classify(e, messages::LOAD_FAILED, true))
    }

    /// Publish an article. Title and body must be non-empty; nothing is sent
    /// otherwise. Returns the new item's id.
    pub async fn create_content(
        &self,
        title: &str,
        content: &str,
        author: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<String, ContentError> {
        let new = NewContent::new(title, content, author, user_id)?;
        let id = self
            .api
            .create_content(&new, session_id)
            .await
            .map_err(|e| self.classify(e, messages::SAVE_FAILED, true))?;

        tracing::info!(id = %id, title, "Article created");
        Ok(id)
    }

    /// Delete an article after the user confirms.
    pub async fn delete_content(
        &self,
        id: &str,
        session_id: &str,
    ) -> Result<DeleteOutcome, ContentError> {
        if !self.confirmation.confirm(messages::CONFIRM_DELETE) {
            tracing::debug!(id, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        self.api
            .delete_content(id, session_id)
            .await
            .map_err(|e| self.classify(e, messages::DELETE_FAILED, true))?;

        tracing::info!(id, "Article deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Map a backend failure. A 401 on an authenticated call runs the
    /// recovery path.
    fn classify(&self, err: ApiError, fallback: &str, authenticated: bool) -> ContentError {
        if authenticated && err.is_unauthorized() {
            tracing::warn!("Session rejected by backend");
            self.recover();
            return ContentError::SessionExpired;
        }

        match err {
            ApiError::Rejected { status, detail } => {
                tracing::debug!(status, "Content request rejected");
                ContentError::Rejected(detail.unwrap_or_else(|| fallback.to_string()))
            }
            ApiError::Transport(e) => {
                tracing::error!(error = %e, "Backend unreachable");
                ContentError::Connection
            }
            ApiError::Decode(e) => {
                tracing::error!(error = %e, "Backend sent an unreadable body");
                ContentError::Malformed
            }
        }
    }

    fn recover(&self) {
        if let Err(e) = self.session.clear() {
            tracing::error!(error = %e, "Failed to clear rejected session");
        }
        self.navigator.navigate(Route::Landing);
    }
}
