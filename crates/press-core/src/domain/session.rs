use serde::{Deserialize, Serialize};

use super::User;

/// An authenticated session: the backend-issued identifier plus the cached
/// user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub user: User,
}

impl Session {
    pub fn new(session_id: impl Into<String>, user: User) -> Self {
        Self {
            session_id: session_id.into(),
            user,
        }
    }
}
