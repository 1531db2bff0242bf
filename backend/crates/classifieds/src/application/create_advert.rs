//! Create Advert Use Case
//!
//! The authenticated caller becomes the owner.

use std::sync::Arc;

use crate::application::authenticate::AuthenticatedUser;
use crate::application::output::{AdvertOutput, UserOutput};
use crate::domain::entity::advert::Advert;
use crate::domain::repository::AdvertRepository;
use crate::domain::value_object::advert_text::{AdvertDescription, AdvertTitle};
use crate::error::ClassifiedsResult;

/// Create advert input
pub struct CreateAdvertInput {
    pub title: String,
    pub description: String,
}

/// Create advert use case
pub struct CreateAdvertUseCase<A>
where
    A: AdvertRepository,
{
    advert_repo: Arc<A>,
}

impl<A> CreateAdvertUseCase<A>
where
    A: AdvertRepository,
{
    pub fn new(advert_repo: Arc<A>) -> Self {
        Self { advert_repo }
    }

    pub async fn execute(
        &self,
        owner: &AuthenticatedUser,
        input: CreateAdvertInput,
    ) -> ClassifiedsResult<AdvertOutput> {
        let title = AdvertTitle::new(input.title)?;
        let description = AdvertDescription::new(input.description)?;

        let advert = Advert::new(owner.user_id, title, description);

        // Owner deleted since authentication surfaces as UserNotFound
        self.advert_repo.create(&advert).await?;

        tracing::info!(
            advert_id = %advert.advert_id,
            owner_id = %owner.user_id,
            "Advert created"
        );

        let owner = UserOutput {
            user_id: owner.user_id,
            email: owner.email.clone(),
        };

        Ok(AdvertOutput::new(&advert, owner))
    }
}
