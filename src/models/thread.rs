// src/models/thread.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use super::{all_present, comment::CommentDetails, payload::Payload};
use crate::error::{DomainError, Scope};

/// Thread creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl NewThread {
    pub fn new(title: &str, body: &str, owner: &str) -> Result<Self, DomainError> {
        if !all_present(&[title, body, owner]) {
            return Err(DomainError::MissingProperty(Scope::NewThread));
        }

        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
            owner: owner.to_string(),
        })
    }

    /// Validates the raw JSON body; `owner` comes from the access token.
    pub fn from_payload(body: &Value, owner: &str) -> Result<Self, DomainError> {
        let payload = Payload::new(body);

        if !payload.has_all(&["title", "body"]) || owner.is_empty() {
            return Err(DomainError::MissingProperty(Scope::NewThread));
        }

        match (payload.str("title"), payload.str("body")) {
            (Some(title), Some(body)) => Self::new(title, body, owner),
            _ => Err(DomainError::InvalidType(Scope::NewThread)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn new(id: &str, title: &str, owner: &str) -> Result<Self, DomainError> {
        if !all_present(&[id, title, owner]) {
            return Err(DomainError::MissingProperty(Scope::AddedThread));
        }

        Ok(Self {
            id: id.to_string(),
            title: title.to_string(),
            owner: owner.to_string(),
        })
    }
}

/// A thread joined with its owner's username, as read from storage.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ThreadRow {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// Public view of a thread with its comments in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetails {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetails>,
}

impl ThreadDetails {
    /// Builds the view with no comments attached yet.
    pub fn new(row: ThreadRow) -> Result<Self, DomainError> {
        if !all_present(&[&row.id, &row.title, &row.body, &row.username]) {
            return Err(DomainError::MissingProperty(Scope::ThreadDetails));
        }

        Ok(Self {
            id: row.id,
            title: row.title,
            body: row.body,
            date: row.date,
            username: row.username,
            comments: Vec::new(),
        })
    }

    pub fn with_comments(self, comments: Vec<CommentDetails>) -> Self {
        Self { comments, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> ThreadRow {
        ThreadRow {
            id: "thread-2004".to_string(),
            title: "Pawapuan".to_string(),
            body: "Deskripsi".to_string(),
            date: "2005-09-28T00:00:00Z".parse().unwrap(),
            username: "chloe".to_string(),
        }
    }

    #[test]
    fn new_thread_requires_title_and_body() {
        let body = json!({ "title": "Pawapuan" });

        assert_eq!(
            NewThread::from_payload(&body, "user-2005"),
            Err(DomainError::MissingProperty(Scope::NewThread))
        );
    }

    #[test]
    fn new_thread_treats_false_and_zero_as_missing() {
        for body in [
            json!({ "title": false, "body": "Deskripsi" }),
            json!({ "title": "Pawapuan", "body": 0 }),
        ] {
            assert_eq!(
                NewThread::from_payload(&body, "user-2005"),
                Err(DomainError::MissingProperty(Scope::NewThread))
            );
        }
    }

    #[test]
    fn new_thread_requires_owner() {
        let body = json!({ "title": "Pawapuan", "body": "Deskripsi" });

        assert_eq!(
            NewThread::from_payload(&body, ""),
            Err(DomainError::MissingProperty(Scope::NewThread))
        );
    }

    #[test]
    fn new_thread_rejects_wrong_types() {
        let body = json!({ "title": {}, "body": true });

        assert_eq!(
            NewThread::from_payload(&body, "user-2005"),
            Err(DomainError::InvalidType(Scope::NewThread))
        );
    }

    #[test]
    fn new_thread_keeps_fields() {
        let body = json!({ "title": "Pawapuan", "body": "Deskripsi" });

        let thread = NewThread::from_payload(&body, "user-2005").unwrap();

        assert_eq!(thread.title, "Pawapuan");
        assert_eq!(thread.body, "Deskripsi");
        assert_eq!(thread.owner, "user-2005");
    }

    #[test]
    fn added_thread_requires_every_property() {
        assert_eq!(
            AddedThread::new("thread-2004", "Pawapuan", ""),
            Err(DomainError::MissingProperty(Scope::AddedThread))
        );

        let added = AddedThread::new("thread-2004", "Pawapuan", "user-2005").unwrap();
        assert_eq!(added.id, "thread-2004");
        assert_eq!(added.title, "Pawapuan");
        assert_eq!(added.owner, "user-2005");
    }

    #[test]
    fn thread_details_starts_without_comments() {
        let details = ThreadDetails::new(row()).unwrap();

        assert_eq!(details.id, "thread-2004");
        assert_eq!(details.username, "chloe");
        assert!(details.comments.is_empty());
    }

    #[test]
    fn thread_details_requires_title() {
        let mut row = row();
        row.title.clear();

        assert_eq!(
            ThreadDetails::new(row),
            Err(DomainError::MissingProperty(Scope::ThreadDetails))
        );
    }

    #[test]
    fn thread_details_serializes_date_and_empty_comments() {
        let details = ThreadDetails::new(row()).unwrap();
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["date"], "2005-09-28T00:00:00Z");
        assert_eq!(json["comments"], json!([]));
    }
}
