use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::thread::{AddedThread, NewThread, ThreadDetails, ThreadRow},
    repositories::{THREAD_NOT_FOUND, ThreadRepository},
    utils::id::generate_id,
};

#[derive(Clone)]
pub struct ThreadRepositoryPostgres {
    pool: PgPool,
}

impl ThreadRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for ThreadRepositoryPostgres {
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread, AppError> {
        let (id, title, owner): (String, String, String) = sqlx::query_as(
            r#"
            INSERT INTO threads (id, title, body, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, owner
            "#,
        )
        .bind(generate_id("thread"))
        .bind(&new_thread.title)
        .bind(&new_thread.body)
        .bind(&new_thread.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add thread: {:?}", e);
            AppError::from(e)
        })?;

        Ok(AddedThread::new(&id, &title, &owner)?)
    }

    async fn check_availability_thread(&self, thread_id: &str) -> Result<(), AppError> {
        sqlx::query("SELECT 1 FROM threads WHERE id = $1")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound(THREAD_NOT_FOUND.to_string()))?;

        Ok(())
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadDetails, AppError> {
        let row = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT
                threads.id, threads.title, threads.body,
                threads.created_at AS date,
                users.username
            FROM threads
            JOIN users ON users.id = threads.owner
            WHERE threads.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(THREAD_NOT_FOUND.to_string()))?;

        Ok(ThreadDetails::new(row)?)
    }
}
