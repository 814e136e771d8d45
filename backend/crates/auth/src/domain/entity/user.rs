//! User Entity

use chrono::{DateTime, Utc};
use kernel::Principal;
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_role::UserRole};

#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: Email, password_hash: HashedPassword, role: UserRole) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }

    pub fn principal(&self) -> Principal {
        Principal {
            user_id: self.user_id,
            email: self.email.as_str().to_owned(),
            is_admin: self.role.is_admin(),
        }
    }
}
