//! User Entity
//!
//! Registered account: identity plus credential hash.

use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::value_object::{UserId, email::Email, user_password::UserPassword};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Login email (unique)
    pub email: Email,
    /// Argon2id hash, never serialized
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, password_hash: UserPassword) -> Self {
        // Postgres keeps microseconds
        let now = Utc::now().trunc_subsecs(6);

        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update login email
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now().trunc_subsecs(6);
    }

    /// Replace the password hash
    pub fn set_password(&mut self, password_hash: UserPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now().trunc_subsecs(6);
    }
}
