// src/models/mod.rs

pub mod auth;
pub mod comment;
pub mod like_comment;
pub mod payload;
pub mod reply;
pub mod thread;
pub mod user;

/// Shown in place of a soft-deleted comment's content.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// Shown in place of a soft-deleted reply's content.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// Projects stored content into its public form.
/// The only place that looks at the soft-delete flag.
pub(crate) fn redact(content: String, is_delete: bool, marker: &str) -> String {
    if is_delete { marker.to_string() } else { content }
}

/// True when every value is a non-empty string.
pub(crate) fn all_present(values: &[&str]) -> bool {
    values.iter().all(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_replaces_deleted_content_only() {
        assert_eq!(
            redact("Sangat Baik".to_string(), true, DELETED_COMMENT_CONTENT),
            "**komentar telah dihapus**"
        );
        assert_eq!(
            redact("Sangat Baik".to_string(), false, DELETED_COMMENT_CONTENT),
            "Sangat Baik"
        );
    }

    #[test]
    fn all_present_rejects_empty_strings() {
        assert!(all_present(&["thread-1", "user-1"]));
        assert!(!all_present(&["thread-1", ""]));
    }
}
