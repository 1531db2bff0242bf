//! Classifieds Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration, lookup by id or email, profile update, deletion
//! - Adverts owned by exactly one user; only the owner may edit or delete
//! - Deleting a user deletes all of their adverts
//!
//! ## Security Model
//! - Every owner-restricted request carries `Authorization: email:password`
//! - Passwords hashed with Argon2id, verified in constant time
//! - Unknown email and wrong password are indistinguishable to the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::ClassifiedsConfig;
pub use error::{ClassifiedsError, ClassifiedsResult};
pub use infra::memory::InMemoryClassifiedsRepository;
pub use infra::postgres::PgClassifiedsRepository;
pub use presentation::router::{classifieds_router, classifieds_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
