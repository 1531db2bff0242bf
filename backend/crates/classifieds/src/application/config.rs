//! Application Configuration
//!
//! Configuration for the Classifieds application layer.

/// Re-export HashingParams from platform
pub use platform::password::HashingParams;

/// Classifieds application configuration
#[derive(Debug, Clone, Default)]
pub struct ClassifiedsConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Argon2id cost for newly created hashes
    pub password_hashing: HashingParams,
}

impl ClassifiedsConfig {
    /// Cheapest Argon2 parameters so tests stay fast
    pub fn for_tests() -> Self {
        Self {
            password_pepper: None,
            password_hashing: HashingParams::minimal(),
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
