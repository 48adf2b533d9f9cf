use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::errors::Rejection;
use crate::domain::authentication::models::AuthenticatedUser;
use crate::domain::authentication::models::Credential;
use crate::domain::authentication::models::Registration;

/// Port for the register / login use cases and the request gate.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new identity and issue its first token.
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Email is already registered
    /// * `Hashing` - Password hashing failed
    /// * `TokenIssuance` - Token signing failed
    /// * `Repository` - Database operation failed
    async fn register(&self, credential: Credential) -> Result<Registration, AuthError>;

    /// Check a credential and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `Hashing` - Stored hash could not be checked
    /// * `TokenIssuance` - Token signing failed
    /// * `Repository` - Database operation failed
    async fn login(&self, credential: Credential) -> Result<String, AuthError>;

    /// Decide whether a request carrying `authorization` may proceed.
    ///
    /// Pure: no I/O, no persistence access.
    fn authorize(&self, authorization: Option<&str>) -> Result<AuthenticatedUser, Rejection>;
}
