use serde::{Deserialize, Serialize};

/// User entity - the signed-in account as the backend reports it.
///
/// Replaced wholesale on every login; the client never edits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub created_at: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            created_at: created_at.into(),
        }
    }
}
