//! Credential header parsing
//!
//! Requests authenticate with `Authorization: <email>:<password>`.
//! The value is split on the first colon, so the password may contain
//! colons and the email may not.

use axum::http::{HeaderMap, HeaderName, header};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Email/password pair taken from a request header
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Move the password out, leaving an empty string behind
    pub fn take_password(&mut self) -> String {
        std::mem::take(&mut self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Error when extracting credentials
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Missing header: {0}")]
    MissingHeader(String),

    #[error("Malformed header: {0}")]
    MalformedHeader(String),
}

/// Extract credentials from the `Authorization` header
pub fn extract_credentials(headers: &HeaderMap) -> Result<Credentials, CredentialsError> {
    extract_credentials_from(headers, &header::AUTHORIZATION)
}

/// Extract credentials from an arbitrary header
///
/// ## Returns
/// * `Err(MissingHeader)` - header absent
/// * `Err(MalformedHeader)` - not UTF-8, or no colon
fn extract_credentials_from(
    headers: &HeaderMap,
    name: &HeaderName,
) -> Result<Credentials, CredentialsError> {
    let value = headers
        .get(name)
        .ok_or_else(|| CredentialsError::MissingHeader(name.to_string()))?;

    // HeaderValue::to_str only accepts visible ASCII; passwords may be UTF-8
    let value = std::str::from_utf8(value.as_bytes())
        .map_err(|_| CredentialsError::MalformedHeader(name.to_string()))?;

    parse_credentials(value).ok_or_else(|| CredentialsError::MalformedHeader(name.to_string()))
}

/// Split `email:password` on the first colon
pub fn parse_credentials(value: &str) -> Option<Credentials> {
    let (email, password) = value.split_once(':')?;
    Some(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}
