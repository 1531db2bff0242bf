//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod create_advert;
pub mod delete_advert;
pub mod delete_user;
pub mod get_advert;
pub mod get_user;
pub mod output;
mod password;
pub mod register_user;
pub mod update_advert;
pub mod update_user;

// Re-exports
pub use authenticate::{AuthenticateUseCase, AuthenticatedUser};
pub use config::ClassifiedsConfig;
pub use create_advert::{CreateAdvertInput, CreateAdvertUseCase};
pub use delete_advert::DeleteAdvertUseCase;
pub use delete_user::DeleteUserUseCase;
pub use get_advert::GetAdvertUseCase;
pub use get_user::GetUserUseCase;
pub use output::{AdvertOutput, UserOutput};
pub use register_user::{RegisterUserInput, RegisterUserUseCase};
pub use update_advert::{UpdateAdvertInput, UpdateAdvertUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
