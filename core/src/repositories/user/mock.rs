//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::otp::OneTimePasscode;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository backed by a map
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Snapshot of a stored user, looked up by email
    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().await;
        users.values().find(|u| same_email(&u.email, email)).cloned()
    }

    /// Mutate a stored user in place, e.g. to move an OTP expiry into the past
    pub async fn update_user<F>(&self, email: &str, update: F) -> bool
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.write().await;
        match users.values_mut().find(|u| same_email(&u.email, email)) {
            Some(user) => {
                update(user);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Emails compare like the users table's case-insensitive collation
fn same_email(stored: &str, candidate: &str) -> bool {
    stored.eq_ignore_ascii_case(candidate)
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| same_email(&u.email, &user.email) || u.phone == user.phone)
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| same_email(&u.email, email) || phone.map_or(false, |p| u.phone == p))
            .cloned())
    }

    async fn confirm_registration(&self, token_hash: &str) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;

        match users
            .values_mut()
            .find(|u| u.confirmation_token_hash == token_hash && !u.is_confirmed)
        {
            Some(user) => {
                user.confirm();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn set_current_otp(
        &self,
        email: &str,
        otp: &OneTimePasscode,
    ) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;

        match users.values_mut().find(|u| same_email(&u.email, email)) {
            Some(user) => {
                user.set_otp(otp.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
#[path = "tests/mock_tests.rs"]
mod tests;
