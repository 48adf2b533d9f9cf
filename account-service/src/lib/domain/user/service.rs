use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::credentials;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserChanges;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing shared with the authentication flow
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash(&self, password: String) -> Result<String, UserError> {
        credentials::hash_password(&self.authenticator, password)
            .await
            .map_err(|e| UserError::Hashing(e.to_string()))
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::DuplicateIdentity(command.email.to_string()));
        }

        let password_hash = self.hash(command.password).await?;

        let user = self
            .repository
            .create(NewUser {
                email: command.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User created");

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        if command.is_empty() {
            return Err(UserError::NoChanges);
        }

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_email) = &command.email {
            if *new_email != existing.email
                && self.repository.find_by_email(new_email).await?.is_some()
            {
                return Err(UserError::DuplicateIdentity(new_email.to_string()));
            }
        }

        let password_hash = match command.password {
            Some(password) => Some(self.hash(password).await?),
            None => None,
        };

        let updated = self
            .repository
            .update(
                id,
                UserChanges {
                    email: command.email,
                    password_hash,
                },
            )
            .await?;

        tracing::info!(user_id = %updated.id, "User updated");

        Ok(updated)
    }

    async fn delete_user(&self, id: &UserId) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, "User deleted");

        Ok(user)
    }
}
