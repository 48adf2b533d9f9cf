use axum::extract::State;
use axum::http::StatusCode;

use super::register::CredentialRequestBody;
use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use super::UserData;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CredentialRequestBody>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = CreateUserCommand::new(body.email, body.password)?;

    state
        .user_service
        .create_user(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}
