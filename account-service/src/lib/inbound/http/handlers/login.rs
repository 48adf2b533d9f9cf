use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::register::CredentialRequestBody;
use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use crate::authentication::models::Credential;
use crate::authentication::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CredentialRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let credential = Credential::new(body.email, body.password)?;

    state
        .auth_service
        .login(credential)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, LoginResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
