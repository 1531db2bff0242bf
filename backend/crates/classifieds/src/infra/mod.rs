//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryClassifiedsRepository;
pub use postgres::PgClassifiedsRepository;
