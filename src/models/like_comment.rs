use super::all_present;
use crate::error::{DomainError, Scope};

/// One user's like on one comment, addressed through its thread.
///
/// Storage keys likes on `(comment_id, owner)`; `thread_id` is only used
/// for the availability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeComment {
    pub thread_id: String,
    pub comment_id: String,
    pub owner: String,
}

impl LikeComment {
    pub fn new(thread_id: &str, comment_id: &str, owner: &str) -> Result<Self, DomainError> {
        if !all_present(&[thread_id, comment_id, owner]) {
            return Err(DomainError::MissingProperty(Scope::LikeComment));
        }

        Ok(Self {
            thread_id: thread_id.to_string(),
            comment_id: comment_id.to_string(),
            owner: owner.to_string(),
        })
    }
}
