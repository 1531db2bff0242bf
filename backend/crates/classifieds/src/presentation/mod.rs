//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::ClassifiedsAppState;
pub use middleware::require_credentials;
pub use router::{classifieds_router, classifieds_router_generic};
