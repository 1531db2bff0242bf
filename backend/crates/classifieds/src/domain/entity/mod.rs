//! Entity Module

pub mod advert;
pub mod user;
