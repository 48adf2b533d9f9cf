use std::fmt;

use auth::Principal;

use crate::domain::user::models::required;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::MissingFieldError;

/// Login identifier and plaintext secret, alive only for one request.
#[derive(Clone)]
pub struct Credential {
    pub email: EmailAddress,
    password: String,
}

impl Credential {
    /// Build a credential from raw request fields.
    ///
    /// Runs before any repository lookup.
    ///
    /// # Errors
    /// * `MissingFieldError` - Email or password absent or blank
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, MissingFieldError> {
        let email = EmailAddress::new(required("email", email)?)?;
        let password = required("password", password)?;
        Ok(Self { email, password })
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of a successful registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub id: UserId,
    pub email: EmailAddress,
    pub token: String,
}

/// Identity attached to a request after its token was verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

impl From<Principal> for AuthenticatedUser {
    fn from(principal: Principal) -> Self {
        Self {
            user_id: UserId(principal.id),
            email: principal.identifier,
        }
    }
}

pub fn principal_of(user: &User) -> Principal {
    Principal {
        id: user.id.0,
        identifier: user.email.as_str().to_string(),
    }
}
