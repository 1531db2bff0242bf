//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{advert::Advert, user::User};
use crate::domain::value_object::{
    AdvertId, UserId,
    advert_text::{AdvertDescription, AdvertTitle},
    email::Email,
    user_password::UserPassword,
};
use crate::error::ClassifiedsResult;

/// Fields to overwrite on a stored user; `None` keeps the stored value
#[derive(Debug, Default)]
pub struct UserChanges {
    pub email: Option<Email>,
    pub password_hash: Option<UserPassword>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password_hash.is_none()
    }
}

/// Fields to overwrite on a stored advert; `None` keeps the stored value
#[derive(Debug, Default)]
pub struct AdvertChanges {
    pub title: Option<AdvertTitle>,
    pub description: Option<AdvertDescription>,
}

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// Fails with `UserAlreadyExists` when the email is taken.
    async fn create(&self, user: &User) -> ClassifiedsResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> ClassifiedsResult<Option<User>>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &Email) -> ClassifiedsResult<Option<User>>;

    /// Check if any user other than `except` holds the email
    async fn exists_by_email(
        &self,
        email: &Email,
        except: Option<&UserId>,
    ) -> ClassifiedsResult<bool>;

    /// Apply `changes` to the stored row in a single write
    ///
    /// Columns not named in `changes` keep whatever is stored at write time.
    /// Returns the updated user, or `None` if it no longer exists. Fails with
    /// `EmailInUse` when the new email is taken.
    async fn update(
        &self,
        user_id: &UserId,
        changes: &UserChanges,
    ) -> ClassifiedsResult<Option<User>>;

    /// Delete the user and every advert they own in one transaction
    ///
    /// Returns the number of adverts removed, or `None` if there was no such user.
    async fn delete(&self, user_id: &UserId) -> ClassifiedsResult<Option<u64>>;
}

/// Advert repository trait
#[trait_variant::make(AdvertRepository: Send)]
pub trait LocalAdvertRepository {
    /// Create a new advert
    ///
    /// Fails with `UserNotFound` when the owner does not exist.
    async fn create(&self, advert: &Advert) -> ClassifiedsResult<()>;

    /// Find advert by ID
    async fn find_by_id(&self, advert_id: &AdvertId) -> ClassifiedsResult<Option<Advert>>;

    /// Apply `changes` to the stored row in a single write
    ///
    /// Returns the updated advert, or `None` if it no longer exists.
    async fn update(
        &self,
        advert_id: &AdvertId,
        changes: &AdvertChanges,
    ) -> ClassifiedsResult<Option<Advert>>;

    /// Delete advert
    async fn delete(&self, advert_id: &AdvertId) -> ClassifiedsResult<bool>;
}

/// Everything the HTTP layer needs from one store
pub trait ClassifiedsRepository:
    UserRepository + AdvertRepository + Clone + Send + Sync + 'static
{
}

impl<T> ClassifiedsRepository for T where
    T: UserRepository + AdvertRepository + Clone + Send + Sync + 'static
{
}
