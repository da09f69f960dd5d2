//! Error types for the uploader service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors raised while locating, partitioning, or chunking a document.
///
/// Downstream relay failures are not represented here: the relay degrades
/// its payload instead of failing the request.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Requested file is absent from the shared directory
    #[error("File not found: {0}")]
    NotFound(String),

    /// Extension outside the supported set
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// A partitioner could not read the document
    #[error("Failed to parse '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IngestError {
    /// Create a parse error.
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            IngestError::NotFound(_) => StatusCode::NOT_FOUND,
            IngestError::UnsupportedType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            IngestError::Parse { .. } | IngestError::Io(_) | IngestError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            IngestError::NotFound("a.md".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            IngestError::UnsupportedType(".xyz".into()).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            IngestError::parse("a.pdf", "bad xref").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            IngestError::UnsupportedType(".xyz".into()).to_string(),
            "Unsupported file type: .xyz"
        );
        assert_eq!(
            IngestError::NotFound("missing.md".into()).to_string(),
            "File not found: missing.md"
        );
    }
}
