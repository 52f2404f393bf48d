use std::sync::Arc;

use futures_util::future::try_join_all;
use serde_json::Value;

use crate::{
    error::{AppError, DomainError},
    models::{
        comment::CommentDetails,
        reply::ReplyDetails,
        thread::{AddedThread, NewThread, ThreadDetails},
    },
    repositories::{CommentRepository, ReplyRepository, ThreadRepository},
};

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    pub async fn execute(&self, payload: &Value, owner: &str) -> Result<AddedThread, AppError> {
        let new_thread = NewThread::from_payload(payload, owner)?;

        self.thread_repository.add_thread(&new_thread).await
    }
}

/// Assembles the public view of a thread: comments oldest first, each with
/// its replies oldest first, deleted content redacted.
pub struct GetThreadDetailsUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl GetThreadDetailsUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetails, AppError> {
        self.thread_repository
            .check_availability_thread(thread_id)
            .await?;

        let thread = self.thread_repository.get_thread_by_id(thread_id).await?;
        let comment_rows = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;

        // try_join_all keeps input order regardless of completion order.
        let reply_rows = try_join_all(comment_rows.iter().map(|comment| {
            self.reply_repository
                .get_replies_by_comment_id(&comment.id)
        }))
        .await?;

        tracing::debug!(
            "Thread {} has {} comment(s)",
            thread_id,
            comment_rows.len()
        );

        let comments = comment_rows
            .into_iter()
            .zip(reply_rows)
            .map(|(comment, replies)| -> Result<CommentDetails, DomainError> {
                let replies = replies
                    .into_iter()
                    .map(ReplyDetails::new)
                    .collect::<Result<Vec<_>, _>>()?;
                CommentDetails::new(comment, replies)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(thread.with_comments(comments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{
            DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT, comment::CommentRow, reply::ReplyRow,
            thread::ThreadRow,
        },
        repositories::{MockCommentRepository, MockReplyRepository, MockThreadRepository},
    };
    use chrono::{DateTime, Utc};
    use serde_json::json;

    fn date(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    fn thread_details() -> ThreadDetails {
        ThreadDetails::new(ThreadRow {
            id: "thread-2004".to_string(),
            title: "Pawapuan".to_string(),
            body: "Deskripsi".to_string(),
            date: date("2005-09-28T00:00:00Z"),
            username: "chloe".to_string(),
        })
        .unwrap()
    }

    fn comment_row(id: &str, is_delete: bool, like_count: i64) -> CommentRow {
        CommentRow {
            id: id.to_string(),
            username: "kyoka".to_string(),
            date: date("2022-09-28T00:00:00Z"),
            content: "Pawapuan desu".to_string(),
            is_delete,
            like_count,
        }
    }

    fn reply_row(id: &str, is_delete: bool) -> ReplyRow {
        ReplyRow {
            id: id.to_string(),
            username: "chloe".to_string(),
            date: date("2022-09-29T00:00:00Z"),
            content: "Afa iyah".to_string(),
            is_delete,
        }
    }

    #[tokio::test]
    async fn add_thread_persists_validated_thread() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_add_thread()
            .withf(|thread| {
                thread.title == "Pawapuan"
                    && thread.body == "Deskripsi"
                    && thread.owner == "user-2004"
            })
            .times(1)
            .returning(|thread| {
                Ok(AddedThread::new("thread-2004", &thread.title, &thread.owner).unwrap())
            });

        let use_case = AddThreadUseCase::new(Arc::new(thread_repository));

        let added = use_case
            .execute(&json!({ "title": "Pawapuan", "body": "Deskripsi" }), "user-2004")
            .await
            .unwrap();

        assert_eq!(
            added,
            AddedThread::new("thread-2004", "Pawapuan", "user-2004").unwrap()
        );
    }

    #[tokio::test]
    async fn add_thread_rejects_non_string_body() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository.expect_add_thread().never();

        let use_case = AddThreadUseCase::new(Arc::new(thread_repository));

        assert_eq!(
            use_case
                .execute(&json!({ "title": "Pawapuan", "body": 20 }), "user-2004")
                .await,
            Err(AppError::BadRequest(
                "gagal menambahkan thread, tipe data tidak sesuai".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn thread_details_nest_redacted_comments_and_replies_in_order() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_check_availability_thread()
            .withf(|thread_id| thread_id == "thread-2004")
            .returning(|_| Ok(()));
        thread_repository
            .expect_get_thread_by_id()
            .returning(|_| Ok(thread_details()));

        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_get_comments_by_thread_id()
            .returning(|_| {
                Ok(vec![
                    comment_row("comment-1", false, 2),
                    comment_row("comment-2", true, 0),
                ])
            });

        let mut reply_repository = MockReplyRepository::new();
        reply_repository
            .expect_get_replies_by_comment_id()
            .withf(|comment_id| comment_id == "comment-1")
            .returning(|_| Ok(vec![reply_row("reply-1", false), reply_row("reply-2", true)]));
        reply_repository
            .expect_get_replies_by_comment_id()
            .withf(|comment_id| comment_id == "comment-2")
            .returning(|_| Ok(vec![]));

        let use_case = GetThreadDetailsUseCase::new(
            Arc::new(thread_repository),
            Arc::new(comment_repository),
            Arc::new(reply_repository),
        );

        let thread = use_case.execute("thread-2004").await.unwrap();

        assert_eq!(thread.id, "thread-2004");
        assert_eq!(thread.comments.len(), 2);

        let first = &thread.comments[0];
        assert_eq!(first.id, "comment-1");
        assert_eq!(first.content, "Pawapuan desu");
        assert_eq!(first.like_count, 2);
        assert_eq!(first.replies.len(), 2);
        assert_eq!(first.replies[0].content, "Afa iyah");
        assert_eq!(first.replies[1].id, "reply-2");
        assert_eq!(first.replies[1].content, DELETED_REPLY_CONTENT);

        let second = &thread.comments[1];
        assert_eq!(second.id, "comment-2");
        assert_eq!(second.content, DELETED_COMMENT_CONTENT);
        assert!(second.replies.is_empty());
    }

    #[tokio::test]
    async fn thread_without_comments_has_empty_list() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_check_availability_thread()
            .returning(|_| Ok(()));
        thread_repository
            .expect_get_thread_by_id()
            .returning(|_| Ok(thread_details()));

        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_get_comments_by_thread_id()
            .returning(|_| Ok(vec![]));

        let mut reply_repository = MockReplyRepository::new();
        reply_repository.expect_get_replies_by_comment_id().never();

        let use_case = GetThreadDetailsUseCase::new(
            Arc::new(thread_repository),
            Arc::new(comment_repository),
            Arc::new(reply_repository),
        );

        let thread = use_case.execute("thread-2004").await.unwrap();

        assert!(thread.comments.is_empty());
    }

    #[tokio::test]
    async fn missing_thread_aborts_before_reading_comments() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_check_availability_thread()
            .returning(|_| Err(AppError::NotFound("thread tidak ditemukan".to_string())));
        thread_repository.expect_get_thread_by_id().never();

        let mut comment_repository = MockCommentRepository::new();
        comment_repository.expect_get_comments_by_thread_id().never();

        let use_case = GetThreadDetailsUseCase::new(
            Arc::new(thread_repository),
            Arc::new(comment_repository),
            Arc::new(MockReplyRepository::new()),
        );

        assert_eq!(
            use_case.execute("thread-404").await,
            Err(AppError::NotFound("thread tidak ditemukan".to_string()))
        );
    }

    #[tokio::test]
    async fn reply_failure_fails_the_whole_read() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_check_availability_thread()
            .returning(|_| Ok(()));
        thread_repository
            .expect_get_thread_by_id()
            .returning(|_| Ok(thread_details()));

        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_get_comments_by_thread_id()
            .returning(|_| Ok(vec![comment_row("comment-1", false, 0)]));

        let mut reply_repository = MockReplyRepository::new();
        reply_repository
            .expect_get_replies_by_comment_id()
            .returning(|_| Err(AppError::InternalServerError("connection reset".to_string())));

        let use_case = GetThreadDetailsUseCase::new(
            Arc::new(thread_repository),
            Arc::new(comment_repository),
            Arc::new(reply_repository),
        );

        assert!(matches!(
            use_case.execute("thread-2004").await,
            Err(AppError::InternalServerError(_))
        ));
    }
}
