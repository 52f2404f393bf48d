use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppError, models::like_comment::LikeComment, repositories::LikeCommentRepository,
    utils::id::generate_id,
};

/// No unique constraint backs `(comment_id, owner)`; the toggle use case
/// checks before it writes.
#[derive(Clone)]
pub struct LikeCommentRepositoryPostgres {
    pool: PgPool,
}

impl LikeCommentRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeCommentRepository for LikeCommentRepositoryPostgres {
    async fn add_like_comment(&self, like: &LikeComment) -> Result<(), AppError> {
        sqlx::query("INSERT INTO like_comment (id, comment_id, owner) VALUES ($1, $2, $3)")
            .bind(generate_id("like_comment"))
            .bind(&like.comment_id)
            .bind(&like.owner)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to like comment: {:?}", e);
                AppError::from(e)
            })?;

        Ok(())
    }

    async fn check_availability_like_comment(&self, like: &LikeComment) -> Result<bool, AppError> {
        let existing = sqlx::query("SELECT 1 FROM like_comment WHERE comment_id = $1 AND owner = $2")
            .bind(&like.comment_id)
            .bind(&like.owner)
            .fetch_optional(&self.pool)
            .await?;

        Ok(existing.is_some())
    }

    async fn delete_like_comment(&self, like: &LikeComment) -> Result<(), AppError> {
        sqlx::query("DELETE FROM like_comment WHERE comment_id = $1 AND owner = $2")
            .bind(&like.comment_id)
            .bind(&like.owner)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
