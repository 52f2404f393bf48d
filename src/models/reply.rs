use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use super::{DELETED_REPLY_CONTENT, all_present, payload::Payload, redact};
use crate::error::{DomainError, Scope};

/// Reply creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub content: String,
    pub comment_id: String,
    pub owner: String,
}

impl NewReply {
    pub fn new(content: &str, comment_id: &str, owner: &str) -> Result<Self, DomainError> {
        if !all_present(&[content, comment_id, owner]) {
            return Err(DomainError::MissingProperty(Scope::NewReply));
        }

        Ok(Self {
            content: content.to_string(),
            comment_id: comment_id.to_string(),
            owner: owner.to_string(),
        })
    }

    pub fn from_payload(body: &Value, comment_id: &str, owner: &str) -> Result<Self, DomainError> {
        let payload = Payload::new(body);

        if !payload.has("content") || !all_present(&[comment_id, owner]) {
            return Err(DomainError::MissingProperty(Scope::NewReply));
        }

        let content = payload
            .str("content")
            .ok_or(DomainError::InvalidType(Scope::NewReply))?;

        Self::new(content, comment_id, owner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedReply {
    pub fn new(id: &str, content: &str, owner: &str) -> Result<Self, DomainError> {
        if !all_present(&[id, content, owner]) {
            return Err(DomainError::MissingProperty(Scope::AddedReply));
        }

        Ok(Self {
            id: id.to_string(),
            content: content.to_string(),
            owner: owner.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReply {
    pub reply_id: String,
    pub comment_id: String,
    pub thread_id: String,
    pub owner: String,
}

impl DeleteReply {
    pub fn new(
        reply_id: &str,
        comment_id: &str,
        thread_id: &str,
        owner: &str,
    ) -> Result<Self, DomainError> {
        if !all_present(&[reply_id, comment_id, thread_id, owner]) {
            return Err(DomainError::MissingProperty(Scope::DeleteReplyUseCase));
        }

        Ok(Self {
            reply_id: reply_id.to_string(),
            comment_id: comment_id.to_string(),
            thread_id: thread_id.to_string(),
            owner: owner.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ReplyRow {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyDetails {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

impl ReplyDetails {
    pub fn new(row: ReplyRow) -> Result<Self, DomainError> {
        if !all_present(&[&row.id, &row.username, &row.content]) {
            return Err(DomainError::MissingProperty(Scope::ReplyDetails));
        }

        Ok(Self {
            id: row.id,
            username: row.username,
            date: row.date,
            content: redact(row.content, row.is_delete, DELETED_REPLY_CONTENT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(is_delete: bool) -> ReplyRow {
        ReplyRow {
            id: "reply-2004".to_string(),
            username: "chloe".to_string(),
            date: "2022-09-29T00:00:00Z".parse().unwrap(),
            content: "Afa iyah".to_string(),
            is_delete,
        }
    }

    #[test]
    fn new_reply_validates_payload() {
        assert_eq!(
            NewReply::from_payload(&json!({}), "comment-2004", "user-2005"),
            Err(DomainError::MissingProperty(Scope::NewReply))
        );
        assert_eq!(
            NewReply::from_payload(&json!({ "content": 2004 }), "comment-2004", "user-2005"),
            Err(DomainError::InvalidType(Scope::NewReply))
        );
    }

    #[test]
    fn new_reply_keeps_fields() {
        let reply =
            NewReply::from_payload(&json!({ "content": "Apa Iya" }), "comment-2004", "user-2005")
                .unwrap();

        assert_eq!(reply.content, "Apa Iya");
        assert_eq!(reply.comment_id, "comment-2004");
        assert_eq!(reply.owner, "user-2005");
    }

    #[test]
    fn added_reply_round_trips() {
        let added = AddedReply::new("reply-2004", "Apa Iya", "user-2005").unwrap();

        assert_eq!(added.id, "reply-2004");
        assert_eq!(added.content, "Apa Iya");
        assert_eq!(added.owner, "user-2005");
    }

    #[test]
    fn delete_reply_requires_every_id() {
        assert_eq!(
            DeleteReply::new("reply-2004", "comment-2004", "thread-2004", ""),
            Err(DomainError::MissingProperty(Scope::DeleteReplyUseCase))
        );
    }

    #[test]
    fn reply_details_redacts_deleted_content() {
        assert_eq!(ReplyDetails::new(row(false)).unwrap().content, "Afa iyah");
        assert_eq!(
            ReplyDetails::new(row(true)).unwrap().content,
            "**balasan telah dihapus**"
        );
    }

    #[test]
    fn reply_details_requires_id() {
        let mut row = row(false);
        row.id.clear();

        assert_eq!(
            ReplyDetails::new(row),
            Err(DomainError::MissingProperty(Scope::ReplyDetails))
        );
    }
}
