//! Auth client - register, login and logout against the backend.

use std::sync::Arc;

use press_core::ApiError;
use press_core::domain::{Credentials, Route};
use press_core::ports::{Navigator, PressApi};

use crate::messages;
use crate::session::SessionStore;

/// Result of a register or login attempt. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

impl AuthOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Normalize a backend failure: the server's `detail` when it sent one,
    /// the connectivity message for transport failures, `fallback` otherwise.
    fn from_api_error(err: &ApiError, fallback: &str) -> Self {
        let message = match err {
            ApiError::Transport(_) => messages::CONNECTION_FAILED,
            _ => err.detail().unwrap_or(fallback),
        };
        Self::failed(message)
    }
}

#[derive(Clone)]
pub struct AuthClient {
    api: Arc<dyn PressApi>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl AuthClient {
    pub fn new(api: Arc<dyn PressApi>, session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            session,
            navigator,
        }
    }

    /// Create an account. Does not log the caller in.
    pub async fn register(&self, username: &str, password: &str) -> AuthOutcome {
        let credentials = match Credentials::new(username, password) {
            Ok(c) => c,
            Err(e) => return AuthOutcome::failed(e.to_string()),
        };

        match self.api.register(&credentials).await {
            Ok(message) => {
                tracing::info!(username, "Registered");
                AuthOutcome::ok(message)
            }
            Err(e) => {
                tracing::warn!(username, error = %e, "Registration failed");
                AuthOutcome::from_api_error(&e, messages::REGISTRATION_FAILED)
            }
        }
    }

    /// Log in and persist the session on success. Nothing is stored on
    /// failure.
    pub async fn login(&self, username: &str, password: &str) -> AuthOutcome {
        let credentials = match Credentials::new(username, password) {
            Ok(c) => c,
            Err(e) => return AuthOutcome::failed(e.to_string()),
        };

        let session = match self.api.login(&credentials).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(username, error = %e, "Login failed");
                return AuthOutcome::from_api_error(&e, messages::LOGIN_FAILED);
            }
        };

        if let Err(e) = self.session.save(&session.session_id, &session.user) {
            tracing::error!(error = %e, "Failed to persist session");
            return AuthOutcome::failed(messages::SESSION_NOT_SAVED);
        }

        tracing::info!(username, "Logged in");
        AuthOutcome::ok(messages::LOGIN_SUCCEEDED)
    }

    /// Forget the local session and go to the landing page. The backend is
    /// not told.
    pub fn logout(&self) {
        if let Err(e) = self.session.clear() {
            tracing::error!(error = %e, "Failed to clear session");
        }
        self.navigator.navigate(Route::Landing);
    }
}
