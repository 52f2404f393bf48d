use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::AppError,
    models::comment::{AddedComment, DeleteComment, NewComment},
    repositories::{CommentRepository, ThreadRepository},
};

pub struct AddCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    pub async fn execute(
        &self,
        payload: &Value,
        thread_id: &str,
        owner: &str,
    ) -> Result<AddedComment, AppError> {
        let new_comment = NewComment::from_payload(payload, thread_id, owner)?;

        self.thread_repository
            .check_availability_thread(thread_id)
            .await?;

        self.comment_repository.add_comment(&new_comment).await
    }
}

/// Soft-deletes a comment on behalf of its owner.
pub struct DeleteCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    pub async fn execute(&self, request: &DeleteComment) -> Result<(), AppError> {
        self.thread_repository
            .check_availability_thread(&request.thread_id)
            .await?;
        self.comment_repository
            .check_availability_comment(&request.comment_id)
            .await?;
        self.comment_repository
            .verify_comment_access(&request.comment_id, &request.owner)
            .await?;

        tracing::debug!("Deleting comment {}", request.comment_id);
        self.comment_repository
            .delete_comment(&request.comment_id)
            .await
    }
}
