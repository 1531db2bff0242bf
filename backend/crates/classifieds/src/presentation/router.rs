//! Classifieds Router

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;

use crate::application::config::ClassifiedsConfig;
use crate::domain::repository::ClassifiedsRepository;
use crate::infra::postgres::PgClassifiedsRepository;
use crate::presentation::handlers::{self, ClassifiedsAppState};
use crate::presentation::middleware::require_credentials;

/// Create the Classifieds router with PostgreSQL repository
pub fn classifieds_router(repo: PgClassifiedsRepository, config: ClassifiedsConfig) -> Router {
    classifieds_router_generic(repo, config)
}

/// Create a generic Classifieds router for any repository implementation
pub fn classifieds_router_generic<R>(repo: R, config: ClassifiedsConfig) -> Router
where
    R: ClassifiedsRepository,
{
    let state = ClassifiedsAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    // Owner-restricted methods only; reads stay public
    let credentials = middleware::from_fn_with_state(state.clone(), require_credentials::<R>);

    Router::new()
        .route("/user", post(handlers::create_user::<R>))
        .route(
            "/user/{user_id}",
            get(handlers::get_user::<R>)
                .patch(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .route("/user/email/{email}", get(handlers::get_user_by_email::<R>))
        .route(
            "/advert",
            post(handlers::create_advert::<R>).route_layer(credentials.clone()),
        )
        .route(
            "/advert/{advert_id}",
            get(handlers::get_advert::<R>).merge(
                patch(handlers::update_advert::<R>)
                    .delete(handlers::delete_advert::<R>)
                    .route_layer(credentials),
            ),
        )
        .with_state(state)
}
