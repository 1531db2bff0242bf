//! Value Object Module

pub mod advert_text;
pub mod email;
pub mod user_password;

pub use kernel::id::{AdvertId, UserId};
