use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::comment::{AddedComment, CommentRow, NewComment},
    repositories::{COMMENT_FORBIDDEN, COMMENT_NOT_FOUND, CommentRepository},
    utils::id::generate_id,
};

#[derive(Clone)]
pub struct CommentRepositoryPostgres {
    pool: PgPool,
}

impl CommentRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment, AppError> {
        let (id, content, owner): (String, String, String) = sqlx::query_as(
            r#"
            INSERT INTO comments (id, thread_id, owner, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            "#,
        )
        .bind(generate_id("comment"))
        .bind(&new_comment.thread_id)
        .bind(&new_comment.owner)
        .bind(&new_comment.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add comment: {:?}", e);
            AppError::from(e)
        })?;

        Ok(AddedComment::new(&id, &content, &owner)?)
    }

    async fn check_availability_comment(&self, comment_id: &str) -> Result<(), AppError> {
        sqlx::query("SELECT 1 FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound(COMMENT_NOT_FOUND.to_string()))?;

        Ok(())
    }

    async fn verify_comment_access(&self, comment_id: &str, owner: &str) -> Result<(), AppError> {
        sqlx::query("SELECT 1 FROM comments WHERE id = $1 AND owner = $2")
            .bind(comment_id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::Forbidden(COMMENT_FORBIDDEN.to_string()))?;

        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE comments SET is_delete = TRUE, updated_at = NOW() WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete comment: {:?}", e);
                AppError::from(e)
            })?;

        Ok(())
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRow>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT
                comments.id, users.username,
                comments.created_at AS date,
                comments.content, comments.is_delete,
                (SELECT COUNT(*) FROM like_comment WHERE like_comment.comment_id = comments.id) AS like_count
            FROM comments
            JOIN users ON users.id = comments.owner
            WHERE comments.thread_id = $1
            ORDER BY comments.created_at ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
