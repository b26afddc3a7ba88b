use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
///
/// Emails are compared exactly; uniqueness is enforced here, not by callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user, `DuplicateEmail` if the email is taken
    async fn create(&self, user: &User) -> UserResult<()>;

    /// Get a user by email, `NotFound` if absent
    async fn find_by_email(&self, email: &str) -> UserResult<User>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> UserResult<()> {
        // The duplicate check and the insert happen under one write guard
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email() == user.email()) {
            return Err(UserError::DuplicateEmail(user.email().to_string()));
        }

        users.insert(user.id(), user.clone());

        tracing::info!(user_id = %user.id(), "Created user");
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        let users = self.users.read().await;
        users
            .values()
            .find(|u| u.email() == email)
            .cloned()
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }
}
