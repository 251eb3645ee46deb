use crate::error::ValidationError;

/// Minimum password length accepted at registration, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Username/password pair that passed the login form checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Both fields must be non-empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::EmptyFields);
        }
        Ok(Self { username, password })
    }

    /// Registration form checks, in order: non-empty fields, matching
    /// confirmation, minimum length.
    pub fn for_registration(
        username: impl Into<String>,
        password: impl Into<String>,
        confirmation: &str,
    ) -> Result<Self, ValidationError> {
        let credentials = Self::new(username, password)?;
        if credentials.password != confirmation {
            return Err(ValidationError::PasswordMismatch);
        }
        if credentials.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(credentials)
    }
}
