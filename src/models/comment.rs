use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use super::{DELETED_COMMENT_CONTENT, all_present, payload::Payload, redact, reply::ReplyDetails};
use crate::error::{DomainError, Scope};

/// Comment creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub thread_id: String,
    pub owner: String,
}

impl NewComment {
    pub fn new(content: &str, thread_id: &str, owner: &str) -> Result<Self, DomainError> {
        if !all_present(&[content, thread_id, owner]) {
            return Err(DomainError::MissingProperty(Scope::NewComment));
        }

        Ok(Self {
            content: content.to_string(),
            thread_id: thread_id.to_string(),
            owner: owner.to_string(),
        })
    }

    /// Validates the raw JSON body; the thread comes from the path and the
    /// owner from the access token.
    pub fn from_payload(body: &Value, thread_id: &str, owner: &str) -> Result<Self, DomainError> {
        let payload = Payload::new(body);

        if !payload.has("content") || !all_present(&[thread_id, owner]) {
            return Err(DomainError::MissingProperty(Scope::NewComment));
        }

        let content = payload
            .str("content")
            .ok_or(DomainError::InvalidType(Scope::NewComment))?;

        Self::new(content, thread_id, owner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn new(id: &str, content: &str, owner: &str) -> Result<Self, DomainError> {
        if !all_present(&[id, content, owner]) {
            return Err(DomainError::MissingProperty(Scope::AddedComment));
        }

        Ok(Self {
            id: id.to_string(),
            content: content.to_string(),
            owner: owner.to_string(),
        })
    }
}

/// Delete-comment request; every id must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    pub comment_id: String,
    pub thread_id: String,
    pub owner: String,
}

impl DeleteComment {
    pub fn new(comment_id: &str, thread_id: &str, owner: &str) -> Result<Self, DomainError> {
        if !all_present(&[comment_id, thread_id, owner]) {
            return Err(DomainError::MissingProperty(Scope::DeleteCommentUseCase));
        }

        Ok(Self {
            comment_id: comment_id.to_string(),
            thread_id: thread_id.to_string(),
            owner: owner.to_string(),
        })
    }
}

/// A comment as read from storage, joined with its owner's username and
/// its like count.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CommentRow {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
    pub like_count: i64,
}

/// Public view of a comment. Deleted content never survives construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetails {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub like_count: i64,
    pub replies: Vec<ReplyDetails>,
}

impl CommentDetails {
    pub fn new(row: CommentRow, replies: Vec<ReplyDetails>) -> Result<Self, DomainError> {
        if !all_present(&[&row.id, &row.username, &row.content]) {
            return Err(DomainError::MissingProperty(Scope::CommentDetails));
        }
        if row.like_count < 0 {
            return Err(DomainError::InvalidType(Scope::CommentDetails));
        }

        Ok(Self {
            id: row.id,
            username: row.username,
            date: row.date,
            content: redact(row.content, row.is_delete, DELETED_COMMENT_CONTENT),
            like_count: row.like_count,
            replies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(is_delete: bool) -> CommentRow {
        CommentRow {
            id: "comment-2004".to_string(),
            username: "sakamata".to_string(),
            date: "2023-04-08T00:00:00Z".parse().unwrap(),
            content: "Sangat Baik".to_string(),
            is_delete,
            like_count: 2,
        }
    }

    fn reply() -> ReplyDetails {
        ReplyDetails {
            id: "reply-2004".to_string(),
            username: "chloe".to_string(),
            date: "2023-04-09T00:00:00Z".parse().unwrap(),
            content: "Afa iyah".to_string(),
        }
    }

    #[test]
    fn new_comment_requires_content() {
        assert_eq!(
            NewComment::from_payload(&json!({}), "thread-2004", "user-2002"),
            Err(DomainError::MissingProperty(Scope::NewComment))
        );
    }

    #[test]
    fn new_comment_rejects_non_string_content() {
        assert_eq!(
            NewComment::from_payload(&json!({ "content": true }), "thread-2004", "user-2002"),
            Err(DomainError::InvalidType(Scope::NewComment))
        );
    }

    #[test]
    fn new_comment_keeps_fields() {
        let comment =
            NewComment::from_payload(&json!({ "content": "Sangat Baik" }), "thread-2004", "user-2002")
                .unwrap();

        assert_eq!(comment.content, "Sangat Baik");
        assert_eq!(comment.thread_id, "thread-2004");
        assert_eq!(comment.owner, "user-2002");
    }

    #[test]
    fn added_comment_round_trips() {
        let added = AddedComment::new("comment-2004", "Sangat Baik", "user-2002").unwrap();

        assert_eq!(added.id, "comment-2004");
        assert_eq!(added.content, "Sangat Baik");
        assert_eq!(added.owner, "user-2002");
        assert_eq!(
            AddedComment::new("comment-2004", "", "user-2002"),
            Err(DomainError::MissingProperty(Scope::AddedComment))
        );
    }

    #[test]
    fn delete_comment_requires_every_id() {
        assert_eq!(
            DeleteComment::new("comment-2004", "", "user-2002"),
            Err(DomainError::MissingProperty(Scope::DeleteCommentUseCase))
        );
    }

    #[test]
    fn comment_details_keeps_live_content() {
        let details = CommentDetails::new(row(false), vec![reply()]).unwrap();

        assert_eq!(details.content, "Sangat Baik");
        assert_eq!(details.like_count, 2);
        assert_eq!(details.replies, vec![reply()]);
    }

    #[test]
    fn comment_details_redacts_deleted_content() {
        let details = CommentDetails::new(row(true), Vec::new()).unwrap();

        assert_eq!(details.content, "**komentar telah dihapus**");
        assert!(details.replies.is_empty());
    }

    #[test]
    fn comment_details_requires_username() {
        let mut row = row(false);
        row.username.clear();

        assert_eq!(
            CommentDetails::new(row, Vec::new()),
            Err(DomainError::MissingProperty(Scope::CommentDetails))
        );
    }

    #[test]
    fn comment_details_serializes_like_count_in_camel_case() {
        let details = CommentDetails::new(row(false), Vec::new()).unwrap();
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["likeCount"], 2);
        assert!(json.get("is_delete").is_none());
        assert!(json.get("isDelete").is_none());
    }
}
