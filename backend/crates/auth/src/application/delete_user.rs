//! Delete User Use Case
//!
//! Admin operation removing a user by email. Deleting an unknown email is
//! not an error; it reports zero deleted rows.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, email: &str) -> AuthResult<u64> {
        let email = Email::parse(email)?;
        let deleted = self.repo.delete_by_email(&email).await?;

        tracing::info!(email = %email, deleted, "Delete user by email");

        Ok(deleted)
    }
}
