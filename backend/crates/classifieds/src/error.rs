//! Classifieds Error Types
//!
//! Domain-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Every variant renders as
//! `{"error": message}` with the status of its [`ErrorKind`].

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::credentials::CredentialsError;
use thiserror::Error;

/// Classifieds-specific result type alias
pub type ClassifiedsResult<T> = Result<T, ClassifiedsError>;

#[derive(Debug, Error)]
pub enum ClassifiedsError {
    /// Required body field absent
    #[error("{0}")]
    MissingFields(&'static str),

    /// Advert patch with nothing to change
    #[error("No data provided")]
    NoData,

    /// Field present but invalid
    #[error("{0}")]
    Validation(String),

    /// Body is not JSON of the expected shape
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Authorization header is missing")]
    MissingAuthorization,

    #[error("Invalid authorization header")]
    MalformedAuthorization,

    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("You do not have permission to edit this advert")]
    EditForbidden,

    #[error("You do not have permission to delete this advert")]
    DeleteForbidden,

    #[error("User not found")]
    UserNotFound,

    #[error("Advert not found")]
    AdvertNotFound,

    /// Registration with a taken email
    #[error("User already exists")]
    UserAlreadyExists,

    /// Profile update to a taken email
    #[error("Email already in use")]
    EmailInUse,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClassifiedsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassifiedsError::MissingFields(_)
            | ClassifiedsError::NoData
            | ClassifiedsError::Validation(_)
            | ClassifiedsError::MalformedBody(_) => ErrorKind::Validation,
            ClassifiedsError::MissingAuthorization
            | ClassifiedsError::MalformedAuthorization
            | ClassifiedsError::InvalidCredentials => ErrorKind::Unauthorized,
            ClassifiedsError::EditForbidden | ClassifiedsError::DeleteForbidden => {
                ErrorKind::Forbidden
            }
            ClassifiedsError::UserNotFound | ClassifiedsError::AdvertNotFound => {
                ErrorKind::NotFound
            }
            ClassifiedsError::UserAlreadyExists | ClassifiedsError::EmailInUse => {
                ErrorKind::Conflict
            }
            ClassifiedsError::Database(_) | ClassifiedsError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures keep their details in `source` only.
    pub fn into_app_error(self) -> AppError {
        match self {
            ClassifiedsError::Database(e) => AppError::from(e),
            ClassifiedsError::Internal(msg) => AppError::internal("Internal server error")
                .with_source(std::io::Error::other(msg)),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ClassifiedsError::Database(e) => {
                tracing::error!(error = %e, "Classifieds database error");
            }
            ClassifiedsError::Internal(msg) => {
                tracing::error!(message = %msg, "Classifieds internal error");
            }
            ClassifiedsError::InvalidCredentials => {
                tracing::warn!("Invalid credentials presented");
            }
            ClassifiedsError::EditForbidden | ClassifiedsError::DeleteForbidden => {
                tracing::warn!(error = %self, "Advert ownership violation");
            }
            _ => {
                tracing::debug!(error = %self, "Classifieds error");
            }
        }
    }
}

impl IntoResponse for ClassifiedsError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

/// Value objects report validation failures as `AppError`
impl From<AppError> for ClassifiedsError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::Validation => ClassifiedsError::Validation(err.message().to_string()),
            _ => ClassifiedsError::Internal(err.to_string()),
        }
    }
}

impl From<CredentialsError> for ClassifiedsError {
    fn from(err: CredentialsError) -> Self {
        match err {
            CredentialsError::MissingHeader(_) => ClassifiedsError::MissingAuthorization,
            CredentialsError::MalformedHeader(_) => ClassifiedsError::MalformedAuthorization,
        }
    }
}

impl From<JsonRejection> for ClassifiedsError {
    fn from(rejection: JsonRejection) -> Self {
        ClassifiedsError::MalformedBody(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for ClassifiedsError {
    fn from(err: tokio::task::JoinError) -> Self {
        ClassifiedsError::Internal(format!("Blocking task failed: {}", err))
    }
}
