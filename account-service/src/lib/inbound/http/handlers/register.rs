use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use super::UserData;
use crate::authentication::models::Credential;
use crate::authentication::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CredentialRequestBody>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let credential = Credential::new(body.email, body.password)?;

    let registration = state.auth_service.register(credential).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterResponseData {
            user: UserData {
                id: registration.id.0,
                email: registration.email.as_str().to_string(),
            },
            token: registration.token,
        },
    ))
}

/// Raw credential body shared by register and login.
///
/// Fields are optional so that absent values are reported as missing
/// rather than as a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CredentialRequestBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub user: UserData,
    pub token: String,
}
