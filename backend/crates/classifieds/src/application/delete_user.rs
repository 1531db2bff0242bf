//! Delete User Use Case
//!
//! Removes a user together with every advert they own.
//! The route is not behind the credential gate.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::{ClassifiedsError, ClassifiedsResult};

/// Delete user use case
pub struct DeleteUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Returns the number of adverts removed with the user
    pub async fn execute(&self, user_id: &UserId) -> ClassifiedsResult<u64> {
        let adverts_deleted = self
            .user_repo
            .delete(user_id)
            .await?
            .ok_or(ClassifiedsError::UserNotFound)?;

        tracing::warn!(
            user_id = %user_id,
            adverts_deleted,
            "User deleted without authentication"
        );

        Ok(adverts_deleted)
    }
}
