use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::reply::{AddedReply, NewReply, ReplyRow},
    repositories::{REPLY_FORBIDDEN, REPLY_NOT_FOUND, ReplyRepository},
    utils::id::generate_id,
};

#[derive(Clone)]
pub struct ReplyRepositoryPostgres {
    pool: PgPool,
}

impl ReplyRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for ReplyRepositoryPostgres {
    async fn add_reply(&self, new_reply: &NewReply) -> Result<AddedReply, AppError> {
        let (id, content, owner): (String, String, String) = sqlx::query_as(
            r#"
            INSERT INTO replies (id, comment_id, owner, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            "#,
        )
        .bind(generate_id("reply"))
        .bind(&new_reply.comment_id)
        .bind(&new_reply.owner)
        .bind(&new_reply.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add reply: {:?}", e);
            AppError::from(e)
        })?;

        Ok(AddedReply::new(&id, &content, &owner)?)
    }

    async fn check_availability_reply(&self, reply_id: &str) -> Result<(), AppError> {
        sqlx::query("SELECT 1 FROM replies WHERE id = $1")
            .bind(reply_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound(REPLY_NOT_FOUND.to_string()))?;

        Ok(())
    }

    async fn verify_reply_access(&self, reply_id: &str, owner: &str) -> Result<(), AppError> {
        sqlx::query("SELECT 1 FROM replies WHERE id = $1 AND owner = $2")
            .bind(reply_id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::Forbidden(REPLY_FORBIDDEN.to_string()))?;

        Ok(())
    }

    async fn delete_reply(&self, reply_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE replies SET is_delete = TRUE, updated_at = NOW() WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete reply: {:?}", e);
                AppError::from(e)
            })?;

        Ok(())
    }

    async fn get_replies_by_comment_id(&self, comment_id: &str) -> Result<Vec<ReplyRow>, AppError> {
        let rows = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT
                replies.id, users.username,
                replies.created_at AS date,
                replies.content, replies.is_delete
            FROM replies
            JOIN users ON users.id = replies.owner
            WHERE replies.comment_id = $1
            ORDER BY replies.created_at ASC
            "#,
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
