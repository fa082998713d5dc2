use std::path::Path;

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookmarksError>;

#[derive(Debug, Error)]
pub enum BookmarksError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid bookmark file {path}: {source}")]
    InvalidBookmarkFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl BookmarksError {
    pub(crate) fn invalid_bookmark_file(path: &Path, source: serde_json::Error) -> Self {
        Self::InvalidBookmarkFile {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidBookmarkFile { .. } => "INVALID_BOOKMARK_FILE",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }

    /// Filesystem path the error is about, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::NotFound(path) | Self::InvalidBookmarkFile { path, .. } => Some(path.as_str()),
            Self::Io(_) | Self::Json(_) => None,
        }
    }

    pub fn to_payload(&self, operation: impl Into<String>) -> ErrorPayload {
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
            operation: operation.into(),
            path: self.path().map(ToString::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_stable_code_and_operation() {
        let source = serde_json::from_str::<serde_json::Value>("nope").expect_err("bad json");
        let err = BookmarksError::from(source);
        let payload = err.to_payload("host.decode");
        assert_eq!(payload.code, "JSON_ERROR");
        assert_eq!(payload.operation, "host.decode");

        let value = serde_json::to_value(&payload).expect("serialize payload");
        assert!(value.get("path").is_none(), "absent path must be skipped");
    }

    #[test]
    fn invalid_bookmark_file_names_the_offending_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
        let err = BookmarksError::invalid_bookmark_file(Path::new("/tmp/x/Bookmarks"), source);
        assert_eq!(err.code(), "INVALID_BOOKMARK_FILE");
        assert!(err.to_string().starts_with("invalid bookmark file /tmp/x/Bookmarks"));

        let payload = err.to_payload("source.load");
        assert_eq!(payload.path.as_deref(), Some("/tmp/x/Bookmarks"));
    }

    #[test]
    fn not_found_payload_carries_path() {
        let err = BookmarksError::NotFound("/tmp/y/Bookmarks".to_string());
        let value = serde_json::to_value(err.to_payload("source.load")).expect("serialize");
        assert_eq!(value["path"], "/tmp/y/Bookmarks");
        assert_eq!(value["code"], "NOT_FOUND");
    }
}
