//! Authenticate Use Case
//!
//! Checks an email/password pair taken from the credential header.
//! Nothing is persisted; every restricted request authenticates again.

use std::sync::Arc;

use crate::application::config::ClassifiedsConfig;
use crate::application::password::verify_password;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    UserId,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{ClassifiedsError, ClassifiedsResult};

/// Identity established by the credential header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<ClassifiedsConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<ClassifiedsConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Unknown email and wrong password both fail with `InvalidCredentials`
    pub async fn execute(&self, email: &str, password: String) -> ClassifiedsResult<AuthenticatedUser> {
        let user = match Email::new(email) {
            Ok(email) => self.user_repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Ok(raw_password) = RawPassword::new(password) else {
            return Err(ClassifiedsError::InvalidCredentials);
        };

        // Unknown accounts still pay for one verification
        let expected = match &user {
            Some(user) => user.password_hash.clone(),
            None => UserPassword::decoy(&self.config.password_hashing),
        };

        let valid = verify_password(expected, raw_password, &self.config).await?;

        match user {
            Some(user) if valid => {
                tracing::debug!(user_id = %user.user_id, "Credentials accepted");
                Ok(AuthenticatedUser {
                    user_id: user.user_id,
                    email: user.email.into_db(),
                })
            }
            _ => Err(ClassifiedsError::InvalidCredentials),
        }
    }
}
