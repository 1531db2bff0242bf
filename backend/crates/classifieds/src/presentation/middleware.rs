//! Credential Middleware
//!
//! Guards owner-restricted routes. Handlers behind it receive the caller
//! as `Extension<AuthenticatedUser>`.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::credentials::extract_credentials;

use crate::application::AuthenticateUseCase;
use crate::domain::repository::ClassifiedsRepository;
use crate::error::ClassifiedsError;
use crate::presentation::handlers::ClassifiedsAppState;

/// Middleware that requires a valid `Authorization: email:password` header
pub async fn require_credentials<R>(
    State(state): State<ClassifiedsAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ClassifiedsError>
where
    R: ClassifiedsRepository,
{
    let mut credentials = extract_credentials(req.headers())?;

    let password = credentials.take_password();

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(credentials.email(), password).await?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
