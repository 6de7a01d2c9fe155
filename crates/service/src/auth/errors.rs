use thiserror::Error;

/// Failures reported by a [`CredentialStore`](super::repository::CredentialStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user not found")]
    NotFound,
    #[error("user already exists")]
    AlreadyExists,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Business errors for auth workflows.
///
/// `Display` carries the diagnostic detail and is meant for logs only;
/// use [`AuthError::public_message`] for anything shown to a caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("user already exists")]
    Conflict,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::InvalidInput(_) => 1001,
            AuthError::Conflict => 1002,
            AuthError::InvalidCredentials => 1004,
            AuthError::StoreUnavailable(_) => 1200,
            AuthError::InternalError(_) => 1101,
        }
    }

    /// Short snake_case name, used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::InvalidInput(_) => "invalid_input",
            AuthError::Conflict => "conflict",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::StoreUnavailable(_) => "store_unavailable",
            AuthError::InternalError(_) => "internal_error",
        }
    }

    /// Message safe to hand back to the caller. Store and hashing details
    /// never appear here.
    pub fn public_message(&self) -> String {
        match self {
            AuthError::InvalidInput(_) => "invalid payload".into(),
            AuthError::Conflict => "user already exists".into(),
            AuthError::InvalidCredentials => "invalid credentials".into(),
            AuthError::StoreUnavailable(_) => "service temporarily unavailable".into(),
            AuthError::InternalError(_) => "internal server error".into(),
        }
    }
}
