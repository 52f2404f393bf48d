use std::sync::Arc;

use crate::{
    error::AppError,
    models::like_comment::LikeComment,
    repositories::{CommentRepository, LikeCommentRepository, ThreadRepository},
};

/// Flips one user's like on a comment.
///
/// Check-then-act without a transaction: two concurrent toggles by the same
/// user may both insert.
pub struct LikeCommentUseCase {
    like_comment_repository: Arc<dyn LikeCommentRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl LikeCommentUseCase {
    pub fn new(
        like_comment_repository: Arc<dyn LikeCommentRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            like_comment_repository,
            comment_repository,
            thread_repository,
        }
    }

    /// Returns `true` when the comment ends up liked.
    pub async fn execute(&self, like: &LikeComment) -> Result<bool, AppError> {
        self.thread_repository
            .check_availability_thread(&like.thread_id)
            .await?;
        self.comment_repository
            .check_availability_comment(&like.comment_id)
            .await?;

        let already_liked = self
            .like_comment_repository
            .check_availability_like_comment(like)
            .await?;

        if already_liked {
            self.like_comment_repository
                .delete_like_comment(like)
                .await?;
            Ok(false)
        } else {
            self.like_comment_repository.add_like_comment(like).await?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{
        MockCommentRepository, MockLikeCommentRepository, MockThreadRepository,
    };

    fn use_case(like_comment_repository: MockLikeCommentRepository) -> LikeCommentUseCase {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_check_availability_thread()
            .returning(|_| Ok(()));

        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_check_availability_comment()
            .returning(|_| Ok(()));

        LikeCommentUseCase::new(
            Arc::new(like_comment_repository),
            Arc::new(comment_repository),
            Arc::new(thread_repository),
        )
    }

    fn like() -> LikeComment {
        LikeComment::new("thread-2004", "comment-2004", "user-2005").unwrap()
    }

    #[tokio::test]
    async fn likes_comment_not_yet_liked() {
        let mut like_comment_repository = MockLikeCommentRepository::new();
        like_comment_repository
            .expect_check_availability_like_comment()
            .returning(|_| Ok(false));
        like_comment_repository
            .expect_add_like_comment()
            .withf(|like| like.comment_id == "comment-2004" && like.owner == "user-2005")
            .times(1)
            .returning(|_| Ok(()));
        like_comment_repository.expect_delete_like_comment().never();

        assert_eq!(use_case(like_comment_repository).execute(&like()).await, Ok(true));
    }

    #[tokio::test]
    async fn unlikes_comment_already_liked() {
        let mut like_comment_repository = MockLikeCommentRepository::new();
        like_comment_repository
            .expect_check_availability_like_comment()
            .returning(|_| Ok(true));
        like_comment_repository.expect_add_like_comment().never();
        like_comment_repository
            .expect_delete_like_comment()
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(use_case(like_comment_repository).execute(&like()).await, Ok(false));
    }

    #[tokio::test]
    async fn like_on_missing_comment_is_not_found() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_check_availability_thread()
            .returning(|_| Ok(()));

        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_check_availability_comment()
            .returning(|_| Err(AppError::NotFound("komentar tidak ditemukan".to_string())));

        let mut like_comment_repository = MockLikeCommentRepository::new();
        like_comment_repository
            .expect_check_availability_like_comment()
            .never();

        let use_case = LikeCommentUseCase::new(
            Arc::new(like_comment_repository),
            Arc::new(comment_repository),
            Arc::new(thread_repository),
        );

        assert_eq!(
            use_case.execute(&like()).await,
            Err(AppError::NotFound("komentar tidak ditemukan".to_string()))
        );
    }
}
