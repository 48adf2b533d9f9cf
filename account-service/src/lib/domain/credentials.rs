//! Password hashing and verification on Tokio's blocking pool.

use std::sync::Arc;

use auth::AuthenticationError;
use auth::AuthenticationResult;
use auth::Authenticator;
use auth::PasswordError;
use auth::Principal;

pub async fn hash_password(
    authenticator: &Arc<Authenticator>,
    password: String,
) -> Result<String, PasswordError> {
    let authenticator = Arc::clone(authenticator);

    tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
        .await
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
}

pub async fn verify_password(
    authenticator: &Arc<Authenticator>,
    password: String,
    stored_hash: String,
) -> Result<bool, PasswordError> {
    let authenticator = Arc::clone(authenticator);

    tokio::task::spawn_blocking(move || authenticator.verify_password(&password, &stored_hash))
        .await
        .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?
}

pub async fn authenticate(
    authenticator: &Arc<Authenticator>,
    password: String,
    stored_hash: String,
    principal: Principal,
) -> Result<AuthenticationResult, AuthenticationError> {
    let authenticator = Arc::clone(authenticator);

    tokio::task::spawn_blocking(move || {
        authenticator.authenticate(&password, &stored_hash, &principal)
    })
    .await
    .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?
}
