//! Delete Advert Use Case

use std::sync::Arc;

use crate::application::authenticate::AuthenticatedUser;
use crate::domain::repository::AdvertRepository;
use crate::domain::value_object::AdvertId;
use crate::error::{ClassifiedsError, ClassifiedsResult};

/// Delete advert use case
pub struct DeleteAdvertUseCase<A>
where
    A: AdvertRepository,
{
    advert_repo: Arc<A>,
}

impl<A> DeleteAdvertUseCase<A>
where
    A: AdvertRepository,
{
    pub fn new(advert_repo: Arc<A>) -> Self {
        Self { advert_repo }
    }

    pub async fn execute(
        &self,
        caller: &AuthenticatedUser,
        advert_id: &AdvertId,
    ) -> ClassifiedsResult<()> {
        let advert = self
            .advert_repo
            .find_by_id(advert_id)
            .await?
            .ok_or(ClassifiedsError::AdvertNotFound)?;

        if !advert.is_owned_by(&caller.user_id) {
            return Err(ClassifiedsError::DeleteForbidden);
        }

        if !self.advert_repo.delete(advert_id).await? {
            return Err(ClassifiedsError::AdvertNotFound);
        }

        tracing::info!(
            advert_id = %advert_id,
            owner_id = %caller.user_id,
            "Advert deleted"
        );

        Ok(())
    }
}
