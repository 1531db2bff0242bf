//! PostgreSQL Repository Implementations

use chrono::{DateTime, SubsecRound, Utc};
use kernel::error::conversions::is_unique_violation;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{advert::Advert, user::User};
use crate::domain::repository::{AdvertChanges, AdvertRepository, UserChanges, UserRepository};
use crate::domain::value_object::{
    AdvertId, UserId,
    advert_text::{AdvertDescription, AdvertTitle},
    email::Email,
    user_password::UserPassword,
};
use crate::error::{ClassifiedsError, ClassifiedsResult};

/// PostgreSQL foreign_key_violation
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code.as_ref() == PG_FOREIGN_KEY_VIOLATION)
}

/// PostgreSQL-backed classifieds repository
#[derive(Clone)]
pub struct PgClassifiedsRepository {
    pool: PgPool,
}

impl PgClassifiedsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgClassifiedsRepository {
    async fn create(&self, user: &User) -> ClassifiedsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ClassifiedsError::UserAlreadyExists
            } else {
                ClassifiedsError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> ClassifiedsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> ClassifiedsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(
        &self,
        email: &Email,
        except: Option<&UserId>,
    ) -> ClassifiedsResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE email = $1
                  AND ($2::uuid IS NULL OR user_id <> $2)
            )
            "#,
        )
        .bind(email.as_str())
        .bind(except.map(|id| *id.as_uuid()))
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(
        &self,
        user_id: &UserId,
        changes: &UserChanges,
    ) -> ClassifiedsResult<Option<User>> {
        // NULL keeps the column, so concurrent partial updates compose
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                email = COALESCE($2, email),
                password_hash = COALESCE($3, password_hash),
                updated_at = $4
            WHERE user_id = $1
            RETURNING
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(changes.email.as_ref().map(Email::as_str))
        .bind(changes.password_hash.as_ref().map(UserPassword::as_phc_string))
        .bind(Utc::now().trunc_subsecs(6))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ClassifiedsError::EmailInUse
            } else {
                ClassifiedsError::Database(e)
            }
        })?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn delete(&self, user_id: &UserId) -> ClassifiedsResult<Option<u64>> {
        // Dropping the transaction on an early return rolls it back
        let mut tx = self.pool.begin().await?;

        let adverts_deleted = sqlx::query("DELETE FROM adverts WHERE owner_id = $1")
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let users_deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if users_deleted == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;

        Ok(Some(adverts_deleted))
    }
}

// ============================================================================
// Advert Repository Implementation
// ============================================================================

impl AdvertRepository for PgClassifiedsRepository {
    async fn create(&self, advert: &Advert) -> ClassifiedsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO adverts (
                advert_id,
                title,
                description,
                creation_date,
                owner_id
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(advert.advert_id.as_uuid())
        .bind(advert.title.as_str())
        .bind(advert.description.as_str())
        .bind(advert.creation_date())
        .bind(advert.owner_id().as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                ClassifiedsError::UserNotFound
            } else {
                ClassifiedsError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, advert_id: &AdvertId) -> ClassifiedsResult<Option<Advert>> {
        let row = sqlx::query_as::<_, AdvertRow>(
            r#"
            SELECT
                advert_id,
                title,
                description,
                creation_date,
                owner_id
            FROM adverts
            WHERE advert_id = $1
            "#,
        )
        .bind(advert_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AdvertRow::into_advert))
    }

    async fn update(
        &self,
        advert_id: &AdvertId,
        changes: &AdvertChanges,
    ) -> ClassifiedsResult<Option<Advert>> {
        let row = sqlx::query_as::<_, AdvertRow>(
            r#"
            UPDATE adverts SET
                title = COALESCE($2, title),
                description = COALESCE($3, description)
            WHERE advert_id = $1
            RETURNING
                advert_id,
                title,
                description,
                creation_date,
                owner_id
            "#,
        )
        .bind(advert_id.as_uuid())
        .bind(changes.title.as_ref().map(AdvertTitle::as_str))
        .bind(changes.description.as_ref().map(AdvertDescription::as_str))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AdvertRow::into_advert))
    }

    async fn delete(&self, advert_id: &AdvertId) -> ClassifiedsResult<bool> {
        let result = sqlx::query("DELETE FROM adverts WHERE advert_id = $1")
            .bind(advert_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> ClassifiedsResult<User> {
        let password_hash = UserPassword::from_phc_string(self.password_hash).map_err(|e| {
            ClassifiedsError::Internal(format!("Invalid password_hash for {}: {}", self.user_id, e))
        })?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AdvertRow {
    advert_id: Uuid,
    title: String,
    description: String,
    creation_date: DateTime<Utc>,
    owner_id: Uuid,
}

impl AdvertRow {
    fn into_advert(self) -> Advert {
        Advert::from_db(
            AdvertId::from_uuid(self.advert_id),
            AdvertTitle::from_db(self.title),
            AdvertDescription::from_db(self.description),
            self.creation_date,
            UserId::from_uuid(self.owner_id),
        )
    }
}
