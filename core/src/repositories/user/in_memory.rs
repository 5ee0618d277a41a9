//! In-process user directory backed by a `RwLock<HashMap>`

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::UserCredentials;
use crate::errors::DomainError;

use super::trait_::UserLookup;

/// User directory for development mode and tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<String, UserCredentials>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory pre-populated with `users`, keyed by username
    pub fn with_users(users: impl IntoIterator<Item = UserCredentials>) -> Self {
        let map = users
            .into_iter()
            .map(|u| (u.username.clone(), u))
            .collect();
        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace a user, returning the previous record if any
    pub async fn insert(&self, user: UserCredentials) -> Option<UserCredentials> {
        let mut users = self.users.write().await;
        users.insert(user.username.clone(), user)
    }
}

#[async_trait]
impl UserLookup for InMemoryUserDirectory {
    async fn resolve(&self, username: &str) -> Result<Option<UserCredentials>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }
}
