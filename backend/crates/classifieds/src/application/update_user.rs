//! Update User Use Case
//!
//! Changes email and/or password. Email uniqueness is checked up front
//! and again by the store's unique index on write. Only the supplied
//! fields are written, so concurrent patches of different fields compose.

use std::sync::Arc;

use crate::application::config::ClassifiedsConfig;
use crate::application::output::UserOutput;
use crate::application::password::hash_password;
use crate::domain::repository::{UserChanges, UserRepository};
use crate::domain::value_object::{UserId, email::Email, user_password::RawPassword};
use crate::error::{ClassifiedsError, ClassifiedsResult};

/// Update input; absent fields are left alone
#[derive(Default)]
pub struct UpdateUserInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Update user use case
pub struct UpdateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<ClassifiedsConfig>,
}

impl<U> UpdateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<ClassifiedsConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: UpdateUserInput,
    ) -> ClassifiedsResult<UserOutput> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(ClassifiedsError::UserNotFound)?;

        let mut changes = UserChanges::default();

        if let Some(email) = input.email {
            let email = Email::new(email)?;

            // Keeping the current email is not a conflict
            if email != user.email {
                if self.user_repo.exists_by_email(&email, Some(user_id)).await? {
                    return Err(ClassifiedsError::EmailInUse);
                }
                changes.email = Some(email);
            }
        }

        if let Some(password) = input.password {
            let raw_password = RawPassword::new(password)?;
            changes.password_hash = Some(hash_password(raw_password, &self.config).await?);
        }

        if changes.is_empty() {
            return Ok(UserOutput::from(&user));
        }

        let updated = self
            .user_repo
            .update(user_id, &changes)
            .await?
            .ok_or(ClassifiedsError::UserNotFound)?;

        tracing::info!(user_id = %updated.user_id, "User updated");

        Ok(UserOutput::from(&updated))
    }
}
