//! Get User Use Case

use std::sync::Arc;

use crate::application::output::UserOutput;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, email::Email};
use crate::error::{ClassifiedsError, ClassifiedsResult};

/// Get user use case
pub struct GetUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn by_id(&self, user_id: &UserId) -> ClassifiedsResult<UserOutput> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(|user| UserOutput::from(&user))
            .ok_or(ClassifiedsError::UserNotFound)
    }

    /// A malformed email can never be registered, so it is simply not found
    pub async fn by_email(&self, email: &str) -> ClassifiedsResult<UserOutput> {
        let Ok(email) = Email::new(email) else {
            return Err(ClassifiedsError::UserNotFound);
        };

        self.user_repo
            .find_by_email(&email)
            .await?
            .map(|user| UserOutput::from(&user))
            .ok_or(ClassifiedsError::UserNotFound)
    }
}
