//! Sign Up Use Case
//!
//! Registers a candidate (or an admin, for configured emails).

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

pub struct SignUpOutput {
    pub user_id: UserId,
    pub email: Email,
    pub role: UserRole,
}

pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let email = Email::parse(&input.email)?;
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::PasswordPolicy(e.to_string()))?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let role = if self.config.is_admin_email(email.as_str()) {
            UserRole::Admin
        } else {
            UserRole::Candidate
        };

        let user = User::new(email, password_hash, role);
        self.repo.insert_user(&user).await?;

        tracing::info!(user_id = %user.user_id, role = %role, "User registered");

        Ok(SignUpOutput {
            user_id: user.user_id,
            email: user.email,
            role,
        })
    }
}
