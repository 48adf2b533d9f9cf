use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::errors::Rejection;
use crate::domain::authentication::models::principal_of;
use crate::domain::authentication::models::AuthenticatedUser;
use crate::domain::authentication::models::Credential;
use crate::domain::authentication::models::Registration;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::credentials;
use crate::domain::user::models::NewUser;
use crate::user::ports::UserRepository;

const TIMING_PLACEHOLDER_PASSWORD: &str = "timing-placeholder-password";

/// Register / login orchestration and the bearer-token gate.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    // Verified against when the email is unknown so that both login
    // failures cost one hash verification.
    placeholder_hash: Option<String>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create the service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        let placeholder_hash = authenticator
            .hash_password(TIMING_PLACEHOLDER_PASSWORD)
            .map_err(|e| tracing::warn!(error = %e, "Failed to prepare placeholder hash"))
            .ok();

        Self {
            repository,
            authenticator,
            placeholder_hash,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, credential: Credential) -> Result<Registration, AuthError> {
        if self
            .repository
            .find_by_email(&credential.email)
            .await?
            .is_some()
        {
            tracing::debug!("Registration rejected: email already registered");
            return Err(AuthError::DuplicateIdentity(credential.email.to_string()));
        }

        let password_hash =
            credentials::hash_password(&self.authenticator, credential.password().to_string())
                .await
                .map_err(|e| AuthError::Hashing(e.to_string()))?;

        // The store's uniqueness constraint settles races with a concurrent
        // registration; it surfaces as DuplicateIdentity through `?`.
        let user = self
            .repository
            .create(NewUser {
                email: credential.email,
                password_hash,
            })
            .await?;

        // On failure the account stays persisted; the caller can still log in.
        let token = self
            .authenticator
            .issue_token(&principal_of(&user))
            .map_err(|e| {
                tracing::error!(user_id = %user.id, "Registered user but token issuance failed");
                AuthError::TokenIssuance(e.to_string())
            })?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(Registration {
            id: user.id,
            email: user.email,
            token,
        })
    }

    async fn login(&self, credential: Credential) -> Result<String, AuthError> {
        let Some(user) = self.repository.find_by_email(&credential.email).await? else {
            if let Some(placeholder) = &self.placeholder_hash {
                let _ = credentials::verify_password(
                    &self.authenticator,
                    credential.password().to_string(),
                    placeholder.clone(),
                )
                .await;
            }
            tracing::debug!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let result = credentials::authenticate(
            &self.authenticator,
            credential.password().to_string(),
            user.password_hash.clone(),
            principal_of(&user),
        )
        .await
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::debug!("Login rejected");
                AuthError::InvalidCredentials
            }
            AuthenticationError::PasswordError(err) => AuthError::Hashing(err.to_string()),
            AuthenticationError::JwtError(err) => AuthError::TokenIssuance(err.to_string()),
        })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(result.access_token)
    }

    fn authorize(&self, authorization: Option<&str>) -> Result<AuthenticatedUser, Rejection> {
        let token = authorization
            .and_then(bearer_token)
            .ok_or(Rejection::Unauthorized)?;

        self.authenticator
            .verify_token(token)
            .map(AuthenticatedUser::from)
            .ok_or(Rejection::Forbidden)
    }
}

/// Extract the token from a `Bearer <token>` header value.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
