use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::user::{RegisterUser, RegisteredUser},
    repositories::{USER_NOT_FOUND, USERNAME_NOT_FOUND, USERNAME_UNAVAILABLE, UserRepository},
    utils::id::generate_id,
};

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser, AppError> {
        let (id, username, fullname): (String, String, String) = sqlx::query_as(
            r#"
            INSERT INTO users (id, username, password, fullname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, fullname
            "#,
        )
        .bind(generate_id("user"))
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.fullname)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // A concurrent registration can slip past verify_available_username.
            if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
                AppError::BadRequest(USERNAME_UNAVAILABLE.to_string())
            } else {
                tracing::error!("Failed to register user: {:?}", e);
                AppError::from(e)
            }
        })?;

        Ok(RegisteredUser::new(&id, &username, &fullname)?)
    }

    async fn verify_available_username(&self, username: &str) -> Result<(), AppError> {
        let existing = sqlx::query("SELECT 1 FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        if existing.is_some() {
            return Err(AppError::BadRequest(USERNAME_UNAVAILABLE.to_string()));
        }

        Ok(())
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::BadRequest(USERNAME_NOT_FOUND.to_string()))
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::BadRequest(USER_NOT_FOUND.to_string()))
    }
}
