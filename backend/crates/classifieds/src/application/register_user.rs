//! Register User Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::ClassifiedsConfig;
use crate::application::output::UserOutput;
use crate::application::password::hash_password;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{ClassifiedsError, ClassifiedsResult};

/// Register input
pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
}

/// Register user use case
pub struct RegisterUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<ClassifiedsConfig>,
}

impl<U> RegisterUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<ClassifiedsConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> ClassifiedsResult<UserOutput> {
        let email = Email::new(input.email)?;

        // Duplicate email wins over any password problem
        if self.user_repo.exists_by_email(&email, None).await? {
            return Err(ClassifiedsError::UserAlreadyExists);
        }

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = hash_password(raw_password, &self.config).await?;

        let user = User::new(email, password_hash);

        // Unique index catches a concurrent registration
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(UserOutput::from(&user))
    }
}
