use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppError,
    repositories::{AuthenticationRepository, TOKEN_NOT_FOUND},
};

#[derive(Clone)]
pub struct AuthenticationRepositoryPostgres {
    pool: PgPool,
}

impl AuthenticationRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthenticationRepository for AuthenticationRepositoryPostgres {
    async fn add_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("SELECT token FROM authentications WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::BadRequest(TOKEN_NOT_FOUND.to_string()))?;

        Ok(())
    }

    async fn delete_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
