use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserChanges;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store.
///
/// Mirrors the PostgreSQL repository: sequential ids starting at 1 and a
/// uniqueness check on email performed under the write lock.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    last_id: i64,
    users: BTreeMap<i64, User>,
}

impl State {
    fn email_taken(&self, email: &EmailAddress, except: Option<i64>) -> bool {
        self.users
            .values()
            .any(|u| u.email == *email && Some(u.id.0) != except)
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut state = self.state.write().await;

        if state.email_taken(&user.email, None) {
            return Err(UserError::DuplicateIdentity(user.email.to_string()));
        }

        state.last_id += 1;
        let created = User {
            id: UserId(state.last_id),
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        state.users.insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.state.read().await.users.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .state
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.state.read().await.users.values().cloned().collect())
    }

    async fn update(&self, id: &UserId, changes: UserChanges) -> Result<User, UserError> {
        let mut state = self.state.write().await;

        if let Some(email) = &changes.email {
            if state.email_taken(email, Some(id.0)) {
                return Err(UserError::DuplicateIdentity(email.to_string()));
            }
        }

        let user = state
            .users
            .get_mut(&id.0)
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }

        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.state
            .write()
            .await
            .users
            .remove(&id.0)
            .map(|_| ())
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
