//! Update Advert Use Case
//!
//! Only the owner may edit. Owner and creation date never change, and
//! only the supplied fields are written.

use std::sync::Arc;

use crate::application::authenticate::AuthenticatedUser;
use crate::application::output::{AdvertOutput, UserOutput};
use crate::domain::repository::{AdvertChanges, AdvertRepository};
use crate::domain::value_object::{
    AdvertId,
    advert_text::{AdvertDescription, AdvertTitle},
};
use crate::error::{ClassifiedsError, ClassifiedsResult};

/// Update advert input; absent fields are left alone
#[derive(Default)]
pub struct UpdateAdvertInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Update advert use case
pub struct UpdateAdvertUseCase<A>
where
    A: AdvertRepository,
{
    advert_repo: Arc<A>,
}

impl<A> UpdateAdvertUseCase<A>
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
        input: UpdateAdvertInput,
    ) -> ClassifiedsResult<AdvertOutput> {
        let advert = self
            .advert_repo
            .find_by_id(advert_id)
            .await?
            .ok_or(ClassifiedsError::AdvertNotFound)?;

        if !advert.is_owned_by(&caller.user_id) {
            return Err(ClassifiedsError::EditForbidden);
        }

        if input.title.is_none() && input.description.is_none() {
            return Err(ClassifiedsError::NoData);
        }

        let changes = AdvertChanges {
            title: input.title.map(AdvertTitle::new).transpose()?,
            description: input.description.map(AdvertDescription::new).transpose()?,
        };

        let advert = self
            .advert_repo
            .update(advert_id, &changes)
            .await?
            .ok_or(ClassifiedsError::AdvertNotFound)?;

        tracing::info!(
            advert_id = %advert.advert_id,
            owner_id = %caller.user_id,
            "Advert updated"
        );

        let owner = UserOutput {
            user_id: caller.user_id,
            email: caller.email.clone(),
        };

        Ok(AdvertOutput::new(&advert, owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::ClassifiedsConfig;
    use crate::application::create_advert::{CreateAdvertInput, CreateAdvertUseCase};
    use crate::application::register_user::{RegisterUserInput, RegisterUserUseCase};
    use crate::infra::memory::InMemoryClassifiedsRepository;

    async fn register(repo: &Arc<InMemoryClassifiedsRepository>, email: &str) -> AuthenticatedUser {
        let user = RegisterUserUseCase::new(repo.clone(), Arc::new(ClassifiedsConfig::for_tests()))
            .execute(RegisterUserInput {
                email: email.to_string(),
                password: "p1".to_string(),
            })
            .await
            .unwrap();
        AuthenticatedUser {
            user_id: user.user_id,
            email: user.email,
        }
    }

    async fn setup() -> (Arc<InMemoryClassifiedsRepository>, AuthenticatedUser, AdvertOutput) {
        let repo = Arc::new(InMemoryClassifiedsRepository::new());
        let owner = register(&repo, "a@x.com").await;
        let advert = CreateAdvertUseCase::new(repo.clone())
            .execute(
                &owner,
                CreateAdvertInput {
                    title: "Car".to_string(),
                    description: "Used".to_string(),
                },
            )
            .await
            .unwrap();
        (repo, owner, advert)
    }

    #[tokio::test]
    async fn test_owner_edits_description_only() {
        let (repo, owner, advert) = setup().await;

        let updated = UpdateAdvertUseCase::new(repo)
            .execute(
                &owner,
                &advert.advert_id,
                UpdateAdvertInput {
                    title: None,
                    description: Some("Updated".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Car");
        assert_eq!(updated.description, "Updated");
        assert_eq!(updated.creation_date, advert.creation_date);
        assert_eq!(updated.owner, advert.owner);
    }

    #[tokio::test]
    async fn test_non_owner_is_forbidden() {
        let (repo, _, advert) = setup().await;
        let intruder = register(&repo, "b@x.com").await;

        let err = UpdateAdvertUseCase::new(repo)
            .execute(
                &intruder,
                &advert.advert_id,
                UpdateAdvertInput {
                    title: Some("Mine".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ClassifiedsError::EditForbidden));
    }

    #[tokio::test]
    async fn test_empty_patch() {
        let (repo, owner, advert) = setup().await;

        let err = UpdateAdvertUseCase::new(repo)
            .execute(&owner, &advert.advert_id, UpdateAdvertInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ClassifiedsError::NoData));
    }

    #[tokio::test]
    async fn test_missing_advert() {
        let (repo, owner, _) = setup().await;

        let err = UpdateAdvertUseCase::new(repo)
            .execute(&owner, &AdvertId::new(), UpdateAdvertInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ClassifiedsError::AdvertNotFound));
    }

    #[tokio::test]
    async fn test_title_and_description_patches_compose() {
        let (repo, owner, advert) = setup().await;

        let use_case = UpdateAdvertUseCase::new(repo);
        let (title_result, description_result) = tokio::join!(
            use_case.execute(
                &owner,
                &advert.advert_id,
                UpdateAdvertInput {
                    title: Some("Bike".to_string()),
                    description: None,
                },
            ),
            use_case.execute(
                &owner,
                &advert.advert_id,
                UpdateAdvertInput {
                    title: None,
                    description: Some("Updated".to_string()),
                },
            ),
        );
        title_result.unwrap();
        description_result.unwrap();

        let stored = use_case
            .advert_repo
            .find_by_id(&advert.advert_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.title.as_str(), "Bike");
        assert_eq!(stored.description.as_str(), "Updated");
    }
}
