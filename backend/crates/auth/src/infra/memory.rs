//! In-Memory Repository Implementation
//!
//! Backs tests and local runs without a database. Uniqueness is checked
//! and the user inserted under one write lock, so concurrent registrations
//! of the same name cannot both succeed.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::services::CredentialFailure;
use crate::domain::value_object::{UserId, email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Default)]
struct UserTable {
    by_id: HashMap<UserId, User>,
    id_by_user_name: HashMap<String, UserId>,
    id_by_email: HashMap<String, UserId>,
}

/// In-memory user store
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.table.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl UserRepository for InMemoryUserStore {
    async fn insert(&self, new_user: NewUser) -> AuthResult<User> {
        let mut table = self.table.write().await;

        if table.id_by_user_name.contains_key(new_user.user_name.as_str()) {
            return Err(AuthError::ValidationFailed(vec![
                CredentialFailure::UserNameTaken,
            ]));
        }
        if table.id_by_email.contains_key(new_user.email.as_str()) {
            return Err(AuthError::ValidationFailed(vec![CredentialFailure::EmailTaken]));
        }

        let user = User::from_new(UserId::new(), new_user, Utc::now());

        table
            .id_by_user_name
            .insert(user.user_name.as_str().to_string(), user.user_id);
        table
            .id_by_email
            .insert(user.email.as_str().to_string(), user.user_id);
        table.by_id.insert(user.user_id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.table.read().await.by_id.get(user_id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table
            .id_by_user_name
            .get(user_name.as_str())
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self
            .table
            .read()
            .await
            .id_by_user_name
            .contains_key(user_name.as_str()))
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self
            .table
            .read()
            .await
            .id_by_email
            .contains_key(email.as_str()))
    }
}
