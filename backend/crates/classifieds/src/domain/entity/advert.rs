//! Advert Entity
//!
//! A classified listing. `owner_id` and `creation_date` are fixed at
//! creation; only title and description change afterwards.

use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::value_object::{
    AdvertId, UserId,
    advert_text::{AdvertDescription, AdvertTitle},
};

/// Advert entity
#[derive(Debug, Clone)]
pub struct Advert {
    pub advert_id: AdvertId,
    pub title: AdvertTitle,
    pub description: AdvertDescription,
    creation_date: DateTime<Utc>,
    owner_id: UserId,
}

impl Advert {
    /// Create a new advert owned by `owner_id`, stamped with the current time
    pub fn new(owner_id: UserId, title: AdvertTitle, description: AdvertDescription) -> Self {
        Self {
            advert_id: AdvertId::new(),
            title,
            description,
            creation_date: Utc::now().trunc_subsecs(6),
            owner_id,
        }
    }

    /// Rebuild from a stored row
    pub fn from_db(
        advert_id: AdvertId,
        title: AdvertTitle,
        description: AdvertDescription,
        creation_date: DateTime<Utc>,
        owner_id: UserId,
    ) -> Self {
        Self {
            advert_id,
            title,
            description,
            creation_date,
            owner_id,
        }
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_id == *user_id
    }
}
