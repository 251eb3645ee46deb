//! Domain-level error types.

use thiserror::Error;

/// Input rejected before anything is sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Fill in all fields")]
    EmptyFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Backend call failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx answer. `detail` is the error body's `detail` field when the
    /// body had one.
    #[error("Request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub const UNAUTHORIZED: u16 = 401;

    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            detail: Some(detail.into()),
        }
    }

    /// True for a 401 answer, i.e. the server no longer accepts the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status, .. } if *status == Self::UNAUTHORIZED)
    }

    /// Server-provided explanation, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Key-value store errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("I/O failed: {0}")]
    Io(String),
}
