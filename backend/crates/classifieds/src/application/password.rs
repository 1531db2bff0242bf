//! Argon2 work off the async runtime
//!
//! Hashing and verification are CPU bound and run on the blocking pool,
//! inside the caller's span.

use crate::application::config::ClassifiedsConfig;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::ClassifiedsResult;

#[tracing::instrument(name = "Computing password hash", skip_all)]
pub(crate) async fn hash_password(
    raw: RawPassword,
    config: &ClassifiedsConfig,
) -> ClassifiedsResult<UserPassword> {
    let params = config.password_hashing;
    let pepper = config.pepper().map(<[u8]>::to_vec);
    let current_span = tracing::Span::current();

    let hashed = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| UserPassword::from_raw(&raw, &params, pepper.as_deref()))
    })
    .await??;

    Ok(hashed)
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
pub(crate) async fn verify_password(
    expected: UserPassword,
    candidate: RawPassword,
    config: &ClassifiedsConfig,
) -> ClassifiedsResult<bool> {
    let pepper = config.pepper().map(<[u8]>::to_vec);
    let current_span = tracing::Span::current();

    let valid = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| expected.verify(&candidate, pepper.as_deref()))
    })
    .await?;

    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify_on_blocking_pool() {
        let config = ClassifiedsConfig::for_tests();
        let hashed = hash_password(RawPassword::new("p1".to_string()).unwrap(), &config)
            .await
            .unwrap();

        let ok = verify_password(
            hashed.clone(),
            RawPassword::new("p1".to_string()).unwrap(),
            &config,
        )
        .await
        .unwrap();
        assert!(ok);

        let bad = verify_password(hashed, RawPassword::new("p2".to_string()).unwrap(), &config)
            .await
            .unwrap();
        assert!(!bad);
    }

    #[tokio::test]
    async fn test_pepper_must_match() {
        let peppered = ClassifiedsConfig {
            password_pepper: Some(b"pepper".to_vec()),
            ..ClassifiedsConfig::for_tests()
        };
        let hashed = hash_password(RawPassword::new("p1".to_string()).unwrap(), &peppered)
            .await
            .unwrap();

        let plain = ClassifiedsConfig::for_tests();
        let ok = verify_password(hashed, RawPassword::new("p1".to_string()).unwrap(), &plain)
            .await
            .unwrap();
        assert!(!ok);
    }
}
