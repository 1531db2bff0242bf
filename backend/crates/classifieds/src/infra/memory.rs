//! In-memory repository
//!
//! Same contracts as the PostgreSQL store: unique emails, adverts that
//! require an existing owner and go away with it. One lock covers both
//! maps so every operation is atomic.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::{advert::Advert, user::User};
use crate::domain::repository::{AdvertChanges, AdvertRepository, UserChanges, UserRepository};
use crate::domain::value_object::{AdvertId, UserId, email::Email};
use crate::error::{ClassifiedsError, ClassifiedsResult};

#[derive(Default)]
struct MemoryState {
    users: HashMap<UserId, User>,
    adverts: HashMap<AdvertId, Advert>,
}

impl MemoryState {
    fn email_taken(&self, email: &Email, except: Option<&UserId>) -> bool {
        self.users
            .values()
            .any(|u| u.email == *email && Some(&u.user_id) != except)
    }
}

#[derive(Default, Clone)]
pub struct InMemoryClassifiedsRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryClassifiedsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for InMemoryClassifiedsRepository {
    async fn create(&self, user: &User) -> ClassifiedsResult<()> {
        let mut state = self.state.write().await;
        if state.email_taken(&user.email, None) {
            return Err(ClassifiedsError::UserAlreadyExists);
        }
        state.users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> ClassifiedsResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> ClassifiedsResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == *email).cloned())
    }

    async fn exists_by_email(
        &self,
        email: &Email,
        except: Option<&UserId>,
    ) -> ClassifiedsResult<bool> {
        let state = self.state.read().await;
        Ok(state.email_taken(email, except))
    }

    async fn update(
        &self,
        user_id: &UserId,
        changes: &UserChanges,
    ) -> ClassifiedsResult<Option<User>> {
        let mut state = self.state.write().await;
        if changes
            .email
            .as_ref()
            .is_some_and(|email| state.email_taken(email, Some(user_id)))
        {
            return Err(ClassifiedsError::EmailInUse);
        }

        let Some(stored) = state.users.get_mut(user_id) else {
            return Ok(None);
        };
        if let Some(email) = &changes.email {
            stored.set_email(email.clone());
        }
        if let Some(password_hash) = &changes.password_hash {
            stored.set_password(password_hash.clone());
        }
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, user_id: &UserId) -> ClassifiedsResult<Option<u64>> {
        let mut state = self.state.write().await;
        if state.users.remove(user_id).is_none() {
            return Ok(None);
        }

        let before = state.adverts.len();
        state.adverts.retain(|_, advert| !advert.is_owned_by(user_id));
        Ok(Some((before - state.adverts.len()) as u64))
    }
}

// ============================================================================
// Advert Repository Implementation
// ============================================================================

impl AdvertRepository for InMemoryClassifiedsRepository {
    async fn create(&self, advert: &Advert) -> ClassifiedsResult<()> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(&advert.owner_id()) {
            return Err(ClassifiedsError::UserNotFound);
        }
        state.adverts.insert(advert.advert_id, advert.clone());
        Ok(())
    }

    async fn find_by_id(&self, advert_id: &AdvertId) -> ClassifiedsResult<Option<Advert>> {
        let state = self.state.read().await;
        Ok(state.adverts.get(advert_id).cloned())
    }

    async fn update(
        &self,
        advert_id: &AdvertId,
        changes: &AdvertChanges,
    ) -> ClassifiedsResult<Option<Advert>> {
        let mut state = self.state.write().await;
        let Some(stored) = state.adverts.get_mut(advert_id) else {
            return Ok(None);
        };
        if let Some(title) = &changes.title {
            stored.title = title.clone();
        }
        if let Some(description) = &changes.description {
            stored.description = description.clone();
        }
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, advert_id: &AdvertId) -> ClassifiedsResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.adverts.remove(advert_id).is_some())
    }
}
