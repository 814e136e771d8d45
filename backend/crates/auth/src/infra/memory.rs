//! In-memory Repository
//!
//! Process-local user store for tests and database-less local runs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<HashMap<String, User>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.users.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn users(&self) -> AuthResult<MutexGuard<'_, HashMap<String, User>>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::Database(sqlx::Error::PoolTimedOut));
        }
        self.users
            .lock()
            .map_err(|_| AuthError::Internal("user store poisoned".into()))
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn insert_user(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users()?;
        if users.contains_key(user.email.as_str()) {
            return Err(AuthError::EmailTaken);
        }
        users.insert(user.email.as_str().to_owned(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.users()?.get(email.as_str()).cloned())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users()?
            .values()
            .find(|u| u.user_id == *user_id)
            .cloned())
    }

    async fn delete_by_email(&self, email: &Email) -> AuthResult<u64> {
        Ok(self.users()?.remove(email.as_str()).map_or(0, |_| 1))
    }
}
