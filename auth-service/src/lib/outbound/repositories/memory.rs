use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::RepositoryError;

/// Process-local user store.
///
/// Used when no database is configured and by the integration tests.
/// Emails are unique case-insensitively; ids are assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    /// Map of lowercased email -> user
    users: HashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn key(email: &EmailAddress) -> String {
    email.as_str().to_lowercase()
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        // Check and insert under one write lock so concurrent sign-ups cannot both win
        let mut state = self.state.write().await;

        let key = key(&user.email);
        if state.users.contains_key(&key) {
            return Err(RepositoryError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        state.last_id += 1;
        let created = User {
            id: UserId(state.last_id),
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
            created_at: user.created_at,
        };
        state.users.insert(key, created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, RepositoryError> {
        Ok(self.state.read().await.users.get(&key(email)).cloned())
    }
}
