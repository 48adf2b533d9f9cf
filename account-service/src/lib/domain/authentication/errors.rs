use thiserror::Error;

use crate::user::errors::MissingFieldError;
use crate::user::errors::UserError;

/// Failures of the register and login flows.
///
/// The first three variants are expected outcomes mapped to stable client
/// responses; the rest are infrastructure failures.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    #[error("Email already exists: {0}")]
    DuplicateIdentity(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DuplicateIdentity(email) => AuthError::DuplicateIdentity(email),
            UserError::MissingField(field) => AuthError::MissingField(field),
            UserError::Hashing(msg) => AuthError::Hashing(msg),
            other => AuthError::Repository(other.to_string()),
        }
    }
}

/// Why a request was turned away at the authorization gate.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Rejection {
    /// No usable bearer token was presented.
    #[error("Missing or malformed Authorization header")]
    Unauthorized,

    /// A token was presented but is invalid or expired.
    #[error("Invalid or expired token")]
    Forbidden,
}
