//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id with zeroized clear text)
//! - Credential header parsing

pub mod credentials;
pub mod password;
