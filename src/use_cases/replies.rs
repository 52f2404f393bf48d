use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::AppError,
    models::reply::{AddedReply, DeleteReply, NewReply},
    repositories::{CommentRepository, ReplyRepository, ThreadRepository},
};

pub struct AddReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddReplyUseCase {
    pub fn new(
        reply_repository: Arc<dyn ReplyRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            reply_repository,
            comment_repository,
            thread_repository,
        }
    }

    /// Parents are checked before the payload, so a reply to a missing
    /// thread is a 404 even when the body is malformed.
    pub async fn execute(
        &self,
        payload: &Value,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<AddedReply, AppError> {
        self.thread_repository
            .check_availability_thread(thread_id)
            .await?;
        self.comment_repository
            .check_availability_comment(comment_id)
            .await?;

        let new_reply = NewReply::from_payload(payload, comment_id, owner)?;

        self.reply_repository.add_reply(&new_reply).await
    }
}

/// Soft-deletes a reply on behalf of its owner.
pub struct DeleteReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        reply_repository: Arc<dyn ReplyRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            reply_repository,
            comment_repository,
            thread_repository,
        }
    }

    pub async fn execute(&self, request: &DeleteReply) -> Result<(), AppError> {
        self.thread_repository
            .check_availability_thread(&request.thread_id)
            .await?;
        self.comment_repository
            .check_availability_comment(&request.comment_id)
            .await?;
        self.reply_repository
            .check_availability_reply(&request.reply_id)
            .await?;
        self.reply_repository
            .verify_reply_access(&request.reply_id, &request.owner)
            .await?;

        tracing::debug!("Deleting reply {}", request.reply_id);
        self.reply_repository.delete_reply(&request.reply_id).await
    }
}
