use async_trait::async_trait;

use crate::domain::{ContentItem, Credentials, NewContent, Session};
use crate::error::ApiError;

/// The publishing backend, as seen from the client.
///
/// Authenticated calls take the session identifier explicitly; an
/// implementation sends it in whatever header the backend expects.
#[async_trait]
pub trait PressApi: Send + Sync {
    /// Create an account. Returns the server's confirmation message.
    async fn register(&self, credentials: &Credentials) -> Result<String, ApiError>;

    /// Exchange credentials for a session.
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError>;

    /// List content, optionally restricted to one owner.
    async fn list_content(
        &self,
        user_id: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Vec<ContentItem>, ApiError>;

    /// Publish an item. Returns the server-assigned id.
    async fn create_content(
        &self,
        content: &NewContent,
        session_id: &str,
    ) -> Result<String, ApiError>;

    /// Delete an item owned by the session's user.
    async fn delete_content(&self, id: &str, session_id: &str) -> Result<(), ApiError>;

    /// Backend liveness. Returns the reported status.
    async fn health(&self) -> Result<String, ApiError>;
}
