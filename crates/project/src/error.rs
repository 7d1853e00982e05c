//! Error types for the project crate (thiserror-based).

use thiserror::Error;

/// Errors that can occur during timeline document operations.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// File I/O error (read, write, path resolution).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document version is not supported or is from a newer format.
    #[error("Unsupported document version: {version}")]
    UnsupportedVersion { version: u32 },

    /// Document is missing required fields or is structurally invalid.
    #[error("Invalid timeline document: {reason}")]
    InvalidDocument { reason: String },

    /// The document file path does not exist or is not a file.
    #[error("Timeline document not found: {path}")]
    NotFound { path: String },
}

/// Convenience Result type for project operations.
pub type ProjectResult<T> = Result<T, ProjectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProjectError::UnsupportedVersion { version: 99 };
        assert!(err.to_string().contains("99"));

        let err = ProjectError::InvalidDocument {
            reason: "missing project id".into(),
        };
        assert!(err.to_string().contains("missing project id"));

        let err = ProjectError::NotFound {
            path: "/tmp/missing.json".into(),
        };
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let proj_err: ProjectError = io_err.into();
        assert!(matches!(proj_err, ProjectError::Io(_)));
    }

    #[test]
    fn json_error_conversion() {
        let result: Result<crate::types::TimelineDoc, _> = serde_json::from_str("not json");
        let json_err = result.unwrap_err();
        let proj_err: ProjectError = json_err.into();
        assert!(matches!(proj_err, ProjectError::Json(_)));
    }
}
