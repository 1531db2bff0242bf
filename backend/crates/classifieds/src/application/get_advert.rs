//! Get Advert Use Case
//!
//! Loads an advert and resolves its owner.

use std::sync::Arc;

use crate::application::output::{AdvertOutput, UserOutput};
use crate::domain::repository::{AdvertRepository, UserRepository};
use crate::domain::value_object::AdvertId;
use crate::error::{ClassifiedsError, ClassifiedsResult};

/// Get advert use case
pub struct GetAdvertUseCase<U, A>
where
    U: UserRepository,
    A: AdvertRepository,
{
    user_repo: Arc<U>,
    advert_repo: Arc<A>,
}

impl<U, A> GetAdvertUseCase<U, A>
where
    U: UserRepository,
    A: AdvertRepository,
{
    pub fn new(user_repo: Arc<U>, advert_repo: Arc<A>) -> Self {
        Self {
            user_repo,
            advert_repo,
        }
    }

    pub async fn execute(&self, advert_id: &AdvertId) -> ClassifiedsResult<AdvertOutput> {
        let advert = self
            .advert_repo
            .find_by_id(advert_id)
            .await?
            .ok_or(ClassifiedsError::AdvertNotFound)?;

        let owner = self
            .user_repo
            .find_by_id(&advert.owner_id())
            .await?
            .ok_or_else(|| {
                ClassifiedsError::Internal(format!(
                    "Advert {} has no owner {}",
                    advert.advert_id,
                    advert.owner_id()
                ))
            })?;

        Ok(AdvertOutput::new(&advert, UserOutput::from(&owner)))
    }
}
