use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::MissingFieldError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// `password_hash` is an opaque PHC string; it never leaves the domain layer
/// in a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    /// * `NotPositive` - Integer is zero or negative
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|_| UserIdError::InvalidFormat(s.to_string()))?;

        if id <= 0 {
            return Err(UserIdError::NotPositive(id));
        }

        Ok(Self(id))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address, the unique login identifier.
///
/// Only presence is checked; the value is stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// # Errors
    /// * `MissingFieldError` - Email is empty or whitespace
    pub fn new(email: String) -> Result<Self, MissingFieldError> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(MissingFieldError("email"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unwrap a required input field, treating blank strings as absent.
pub fn required(field: &'static str, value: Option<String>) -> Result<String, MissingFieldError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MissingFieldError(field)),
    }
}

/// Unwrap an optional input field, treating blank strings as absent.
pub fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fields of a user about to be persisted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Partial update applied by the repository. `None` leaves a column as is.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<EmailAddress>,
    pub password_hash: Option<String>,
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl CreateUserCommand {
    /// Build the command from raw request fields.
    ///
    /// # Errors
    /// * `MissingFieldError` - Email or password absent
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, MissingFieldError> {
        let email = EmailAddress::new(required("email", email)?)?;
        let password = required("password", password)?;
        Ok(Self { email, password })
    }
}

/// Command to update an existing user.
///
/// Only provided fields are updated; an empty command is rejected by the service.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub email: Option<EmailAddress>,
    pub password: Option<String>,
}

impl UpdateUserCommand {
    pub fn new(email: Option<String>, password: Option<String>) -> Self {
        Self {
            email: optional(email).and_then(|e| EmailAddress::new(e).ok()),
            password: optional(password),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}
