//! Use case outputs
//!
//! Plain read models handed to the presentation layer. The password hash
//! never leaves the application layer.

use chrono::{DateTime, Utc};

use crate::domain::entity::{advert::Advert, user::User};
use crate::domain::value_object::{AdvertId, UserId};

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOutput {
    pub user_id: UserId,
    pub email: String,
}

impl From<&User> for UserOutput {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email.as_str().to_string(),
        }
    }
}

/// Advert with its owner resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertOutput {
    pub advert_id: AdvertId,
    pub title: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub owner: UserOutput,
}

impl AdvertOutput {
    pub(crate) fn new(advert: &Advert, owner: UserOutput) -> Self {
        Self {
            advert_id: advert.advert_id,
            title: advert.title.as_str().to_string(),
            description: advert.description.as_str().to_string(),
            creation_date: advert.creation_date(),
            owner,
        }
    }
}
