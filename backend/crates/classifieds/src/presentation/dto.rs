//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so a missing field is reported with the
//! endpoint's own message instead of a generic deserialization error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{AdvertOutput, UserOutput};
use crate::domain::value_object::{AdvertId, UserId};

// ============================================================================
// User
// ============================================================================

/// POST /user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// PATCH /user/{id}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// User representation (the password hash is never exposed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
}

impl From<UserOutput> for UserResponse {
    fn from(output: UserOutput) -> Self {
        Self {
            id: output.user_id,
            email: output.email,
        }
    }
}

/// DELETE /user/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub message: String,
}

impl Default for DeleteUserResponse {
    fn default() -> Self {
        Self {
            message: "User and all associated adverts deleted successfully".to_string(),
        }
    }
}

// ============================================================================
// Advert
// ============================================================================

/// POST /advert
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAdvertRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// PATCH /advert/{id}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAdvertRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Advert representation with its owner embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertResponse {
    pub id: AdvertId,
    pub title: String,
    pub description: String,
    /// RFC 3339
    pub creation_date: DateTime<Utc>,
    pub owner: UserResponse,
}

impl From<AdvertOutput> for AdvertResponse {
    fn from(output: AdvertOutput) -> Self {
        Self {
            id: output.advert_id,
            title: output.title,
            description: output.description,
            creation_date: output.creation_date,
            owner: output.owner.into(),
        }
    }
}

/// DELETE /advert/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAdvertResponse {
    pub status: String,
}

impl Default for DeleteAdvertResponse {
    fn default() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}
