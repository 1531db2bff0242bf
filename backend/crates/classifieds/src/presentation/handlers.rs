//! HTTP Handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::config::ClassifiedsConfig;
use crate::application::{
    AuthenticatedUser, CreateAdvertInput, CreateAdvertUseCase, DeleteAdvertUseCase,
    DeleteUserUseCase, GetAdvertUseCase, GetUserUseCase, RegisterUserInput, RegisterUserUseCase,
    UpdateAdvertInput, UpdateAdvertUseCase, UpdateUserInput, UpdateUserUseCase,
};
use crate::domain::repository::ClassifiedsRepository;
use crate::domain::value_object::{AdvertId, UserId};
use crate::error::{ClassifiedsError, ClassifiedsResult};
use crate::presentation::dto::{
    AdvertResponse, CreateAdvertRequest, CreateUserRequest, DeleteAdvertResponse,
    DeleteUserResponse, UpdateAdvertRequest, UpdateUserRequest, UserResponse,
};

/// Shared state for classifieds handlers
#[derive(Clone)]
pub struct ClassifiedsAppState<R>
where
    R: ClassifiedsRepository,
{
    pub repo: Arc<R>,
    pub config: Arc<ClassifiedsConfig>,
}

// An id that does not parse cannot name an existing row

fn parse_user_id(raw: &str) -> ClassifiedsResult<UserId> {
    UserId::parse(raw).ok_or(ClassifiedsError::UserNotFound)
}

fn parse_advert_id(raw: &str) -> ClassifiedsResult<AdvertId> {
    AdvertId::parse(raw).ok_or(ClassifiedsError::AdvertNotFound)
}

// ============================================================================
// User
// ============================================================================

/// POST /user
pub async fn create_user<R>(
    State(state): State<ClassifiedsAppState<R>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ClassifiedsResult<(StatusCode, Json<UserResponse>)>
where
    R: ClassifiedsRepository,
{
    let Json(req) = body?;
    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(ClassifiedsError::MissingFields("Missing email or password"));
    };

    let use_case = RegisterUserUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(RegisterUserInput { email, password }).await?;

    Ok((StatusCode::CREATED, Json(output.into())))
}

/// GET /user/{user_id}
pub async fn get_user<R>(
    State(state): State<ClassifiedsAppState<R>>,
    Path(user_id): Path<String>,
) -> ClassifiedsResult<Json<UserResponse>>
where
    R: ClassifiedsRepository,
{
    let user_id = parse_user_id(&user_id)?;

    let use_case = GetUserUseCase::new(state.repo.clone());
    let output = use_case.by_id(&user_id).await?;

    Ok(Json(output.into()))
}

/// GET /user/email/{email}
pub async fn get_user_by_email<R>(
    State(state): State<ClassifiedsAppState<R>>,
    Path(email): Path<String>,
) -> ClassifiedsResult<Json<UserResponse>>
where
    R: ClassifiedsRepository,
{
    let use_case = GetUserUseCase::new(state.repo.clone());
    let output = use_case.by_email(&email).await?;

    Ok(Json(output.into()))
}

/// PATCH /user/{user_id}
pub async fn update_user<R>(
    State(state): State<ClassifiedsAppState<R>>,
    Path(user_id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ClassifiedsResult<Json<UserResponse>>
where
    R: ClassifiedsRepository,
{
    let user_id = parse_user_id(&user_id)?;
    let Json(req) = body?;

    let use_case = UpdateUserUseCase::new(state.repo.clone(), state.config.clone());
    let input = UpdateUserInput {
        email: req.email,
        password: req.password,
    };
    let output = use_case.execute(&user_id, input).await?;

    Ok(Json(output.into()))
}

/// DELETE /user/{user_id}
pub async fn delete_user<R>(
    State(state): State<ClassifiedsAppState<R>>,
    Path(user_id): Path<String>,
) -> ClassifiedsResult<Json<DeleteUserResponse>>
where
    R: ClassifiedsRepository,
{
    let user_id = parse_user_id(&user_id)?;

    let use_case = DeleteUserUseCase::new(state.repo.clone());
    use_case.execute(&user_id).await?;

    Ok(Json(DeleteUserResponse::default()))
}

// ============================================================================
// Advert
// ============================================================================

/// POST /advert (credentials required)
pub async fn create_advert<R>(
    State(state): State<ClassifiedsAppState<R>>,
    Extension(caller): Extension<AuthenticatedUser>,
    body: Result<Json<CreateAdvertRequest>, JsonRejection>,
) -> ClassifiedsResult<(StatusCode, Json<AdvertResponse>)>
where
    R: ClassifiedsRepository,
{
    let Json(req) = body?;
    let (Some(title), Some(description)) = (req.title, req.description) else {
        return Err(ClassifiedsError::MissingFields("Missing required fields"));
    };

    let use_case = CreateAdvertUseCase::new(state.repo.clone());
    let output = use_case
        .execute(&caller, CreateAdvertInput { title, description })
        .await?;

    Ok((StatusCode::CREATED, Json(output.into())))
}

/// GET /advert/{advert_id}
pub async fn get_advert<R>(
    State(state): State<ClassifiedsAppState<R>>,
    Path(advert_id): Path<String>,
) -> ClassifiedsResult<Json<AdvertResponse>>
where
    R: ClassifiedsRepository,
{
    let advert_id = parse_advert_id(&advert_id)?;

    let use_case = GetAdvertUseCase::new(state.repo.clone(), state.repo.clone());
    let output = use_case.execute(&advert_id).await?;

    Ok(Json(output.into()))
}

/// PATCH /advert/{advert_id} (credentials required)
pub async fn update_advert<R>(
    State(state): State<ClassifiedsAppState<R>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(advert_id): Path<String>,
    body: Result<Json<UpdateAdvertRequest>, JsonRejection>,
) -> ClassifiedsResult<Json<AdvertResponse>>
where
    R: ClassifiedsRepository,
{
    let advert_id = parse_advert_id(&advert_id)?;
    let Json(req) = body?;

    let use_case = UpdateAdvertUseCase::new(state.repo.clone());
    let input = UpdateAdvertInput {
        title: req.title,
        description: req.description,
    };
    let output = use_case.execute(&caller, &advert_id, input).await?;

    Ok(Json(output.into()))
}

/// DELETE /advert/{advert_id} (credentials required)
pub async fn delete_advert<R>(
    State(state): State<ClassifiedsAppState<R>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(advert_id): Path<String>,
) -> ClassifiedsResult<Json<DeleteAdvertResponse>>
where
    R: ClassifiedsRepository,
{
    let advert_id = parse_advert_id(&advert_id)?;

    let use_case = DeleteAdvertUseCase::new(state.repo.clone());
    use_case.execute(&caller, &advert_id).await?;

    Ok(Json(DeleteAdvertResponse::default()))
}
