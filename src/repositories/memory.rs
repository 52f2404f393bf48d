//! In-memory storage backend for tests.
//!
//! Implements every repository contract over one shared set of tables so
//! the HTTP surface can be exercised without PostgreSQL. Rows are kept in
//! insertion order, which is also creation order.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    models::{
        comment::{AddedComment, CommentRow, NewComment},
        like_comment::LikeComment,
        reply::{AddedReply, NewReply, ReplyRow},
        thread::{AddedThread, NewThread, ThreadDetails, ThreadRow},
        user::{RegisterUser, RegisteredUser},
    },
    repositories::{
        AuthenticationRepository, COMMENT_FORBIDDEN, COMMENT_NOT_FOUND, CommentRepository,
        LikeCommentRepository, REPLY_FORBIDDEN, REPLY_NOT_FOUND, ReplyRepository,
        THREAD_NOT_FOUND, TOKEN_NOT_FOUND, ThreadRepository, USER_NOT_FOUND, USERNAME_NOT_FOUND,
        USERNAME_UNAVAILABLE, UserRepository,
    },
    utils::id::generate_id,
};

#[derive(Debug, Clone)]
struct UserRecord {
    id: String,
    username: String,
    password: String,
    fullname: String,
}

#[derive(Debug, Clone)]
struct ThreadRecord {
    id: String,
    title: String,
    body: String,
    owner: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct PostRecord {
    id: String,
    parent_id: String,
    owner: String,
    content: String,
    is_delete: bool,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserRecord>,
    tokens: Vec<String>,
    threads: Vec<ThreadRecord>,
    comments: Vec<PostRecord>,
    replies: Vec<PostRecord>,
    likes: Vec<(String, String)>,
}

impl Tables {
    fn username_of(&self, user_id: &str) -> Result<String, AppError> {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.username.clone())
            .ok_or_else(|| AppError::InternalServerError(format!("unknown owner {}", user_id)))
    }
}

/// Shared tables; clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        self.tables
            .lock()
            .map_err(|e| AppError::InternalServerError(e.to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser, AppError> {
        let mut tables = self.tables()?;
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(AppError::BadRequest(USERNAME_UNAVAILABLE.to_string()));
        }

        let record = UserRecord {
            id: generate_id("user"),
            username: user.username.clone(),
            password: user.password.clone(),
            fullname: user.fullname.clone(),
        };
        let registered = RegisteredUser::new(&record.id, &record.username, &record.fullname)?;
        tables.users.push(record);

        Ok(registered)
    }

    async fn verify_available_username(&self, username: &str) -> Result<(), AppError> {
        if self.tables()?.users.iter().any(|u| u.username == username) {
            return Err(AppError::BadRequest(USERNAME_UNAVAILABLE.to_string()));
        }
        Ok(())
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String, AppError> {
        self.tables()?
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.password.clone())
            .ok_or(AppError::BadRequest(USERNAME_NOT_FOUND.to_string()))
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String, AppError> {
        self.tables()?
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.id.clone())
            .ok_or(AppError::BadRequest(USER_NOT_FOUND.to_string()))
    }
}

#[async_trait]
impl AuthenticationRepository for InMemoryStore {
    async fn add_token(&self, token: &str) -> Result<(), AppError> {
        self.tables()?.tokens.push(token.to_string());
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> Result<(), AppError> {
        if self.tables()?.tokens.iter().any(|t| t == token) {
            Ok(())
        } else {
            Err(AppError::BadRequest(TOKEN_NOT_FOUND.to_string()))
        }
    }

    async fn delete_token(&self, token: &str) -> Result<(), AppError> {
        self.tables()?.tokens.retain(|t| t != token);
        Ok(())
    }
}

#[async_trait]
impl ThreadRepository for InMemoryStore {
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread, AppError> {
        let record = ThreadRecord {
            id: generate_id("thread"),
            title: new_thread.title.clone(),
            body: new_thread.body.clone(),
            owner: new_thread.owner.clone(),
            created_at: Utc::now(),
        };
        let added = AddedThread::new(&record.id, &record.title, &record.owner)?;
        self.tables()?.threads.push(record);

        Ok(added)
    }

    async fn check_availability_thread(&self, thread_id: &str) -> Result<(), AppError> {
        if self.tables()?.threads.iter().any(|t| t.id == thread_id) {
            Ok(())
        } else {
            Err(AppError::NotFound(THREAD_NOT_FOUND.to_string()))
        }
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadDetails, AppError> {
        let tables = self.tables()?;
        let thread = tables
            .threads
            .iter()
            .find(|t| t.id == thread_id)
            .ok_or(AppError::NotFound(THREAD_NOT_FOUND.to_string()))?;

        let row = ThreadRow {
            id: thread.id.clone(),
            title: thread.title.clone(),
            body: thread.body.clone(),
            date: thread.created_at,
            username: tables.username_of(&thread.owner)?,
        };

        Ok(ThreadDetails::new(row)?)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment, AppError> {
        let record = PostRecord {
            id: generate_id("comment"),
            parent_id: new_comment.thread_id.clone(),
            owner: new_comment.owner.clone(),
            content: new_comment.content.clone(),
            is_delete: false,
            created_at: Utc::now(),
        };
        let added = AddedComment::new(&record.id, &record.content, &record.owner)?;
        self.tables()?.comments.push(record);

        Ok(added)
    }

    async fn check_availability_comment(&self, comment_id: &str) -> Result<(), AppError> {
        if self.tables()?.comments.iter().any(|c| c.id == comment_id) {
            Ok(())
        } else {
            Err(AppError::NotFound(COMMENT_NOT_FOUND.to_string()))
        }
    }

    async fn verify_comment_access(&self, comment_id: &str, owner: &str) -> Result<(), AppError> {
        let tables = self.tables()?;
        if tables
            .comments
            .iter()
            .any(|c| c.id == comment_id && c.owner == owner)
        {
            Ok(())
        } else {
            Err(AppError::Forbidden(COMMENT_FORBIDDEN.to_string()))
        }
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError> {
        let mut tables = self.tables()?;
        if let Some(comment) = tables.comments.iter_mut().find(|c| c.id == comment_id) {
            comment.is_delete = true;
        }
        Ok(())
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRow>, AppError> {
        let tables = self.tables()?;

        tables
            .comments
            .iter()
            .filter(|c| c.parent_id == thread_id)
            .map(|c| {
                let like_count = tables.likes.iter().filter(|(id, _)| *id == c.id).count();
                Ok(CommentRow {
                    id: c.id.clone(),
                    username: tables.username_of(&c.owner)?,
                    date: c.created_at,
                    content: c.content.clone(),
                    is_delete: c.is_delete,
                    like_count: like_count as i64,
                })
            })
            .collect()
    }
}

#[async_trait]
impl ReplyRepository for InMemoryStore {
    async fn add_reply(&self, new_reply: &NewReply) -> Result<AddedReply, AppError> {
        let record = PostRecord {
            id: generate_id("reply"),
            parent_id: new_reply.comment_id.clone(),
            owner: new_reply.owner.clone(),
            content: new_reply.content.clone(),
            is_delete: false,
            created_at: Utc::now(),
        };
        let added = AddedReply::new(&record.id, &record.content, &record.owner)?;
        self.tables()?.replies.push(record);

        Ok(added)
    }

    async fn check_availability_reply(&self, reply_id: &str) -> Result<(), AppError> {
        if self.tables()?.replies.iter().any(|r| r.id == reply_id) {
            Ok(())
        } else {
            Err(AppError::NotFound(REPLY_NOT_FOUND.to_string()))
        }
    }

    async fn verify_reply_access(&self, reply_id: &str, owner: &str) -> Result<(), AppError> {
        let tables = self.tables()?;
        if tables
            .replies
            .iter()
            .any(|r| r.id == reply_id && r.owner == owner)
        {
            Ok(())
        } else {
            Err(AppError::Forbidden(REPLY_FORBIDDEN.to_string()))
        }
    }

    async fn delete_reply(&self, reply_id: &str) -> Result<(), AppError> {
        let mut tables = self.tables()?;
        if let Some(reply) = tables.replies.iter_mut().find(|r| r.id == reply_id) {
            reply.is_delete = true;
        }
        Ok(())
    }

    async fn get_replies_by_comment_id(&self, comment_id: &str) -> Result<Vec<ReplyRow>, AppError> {
        let tables = self.tables()?;

        tables
            .replies
            .iter()
            .filter(|r| r.parent_id == comment_id)
            .map(|r| {
                Ok(ReplyRow {
                    id: r.id.clone(),
                    username: tables.username_of(&r.owner)?,
                    date: r.created_at,
                    content: r.content.clone(),
                    is_delete: r.is_delete,
                })
            })
            .collect()
    }
}

#[async_trait]
impl LikeCommentRepository for InMemoryStore {
    async fn add_like_comment(&self, like: &LikeComment) -> Result<(), AppError> {
        self.tables()?
            .likes
            .push((like.comment_id.clone(), like.owner.clone()));
        Ok(())
    }

    async fn check_availability_like_comment(&self, like: &LikeComment) -> Result<bool, AppError> {
        Ok(self
            .tables()?
            .likes
            .iter()
            .any(|(comment_id, owner)| *comment_id == like.comment_id && *owner == like.owner))
    }

    async fn delete_like_comment(&self, like: &LikeComment) -> Result<(), AppError> {
        self.tables()?
            .likes
            .retain(|(comment_id, owner)| !(*comment_id == like.comment_id && *owner == like.owner));
        Ok(())
    }
}
