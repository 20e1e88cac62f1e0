//! Error taxonomy shared by every examkit command

use std::path::PathBuf;

/// Errors raised while linking, embedding or converting exam documents
///
/// Handlers return `anyhow::Result`; these values travel inside the
/// `anyhow::Error` so callers can `downcast_ref::<ExamError>()` to
/// tell a schema problem apart from an I/O failure.
#[derive(Debug, thiserror::Error)]
pub enum ExamError {
    #[error("{kind} file {} not found", .path.display())]
    NotFound { kind: &'static str, path: PathBuf },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Transform(String),
}

impl ExamError {
    pub fn not_found(kind: &'static str, path: impl Into<PathBuf>) -> Self {
        ExamError::NotFound {
            kind,
            path: path.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ExamError::Validation(message.into())
    }

    pub fn transform(message: impl Into<String>) -> Self {
        ExamError::Transform(message.into())
    }

    /// Short label used when reporting the failure on the console
    pub fn label(&self) -> &'static str {
        match self {
            ExamError::NotFound { .. } => "not found",
            ExamError::Validation(_) => "validation error",
            ExamError::Transform(_) => "transform error",
        }
    }
}

/// Find the `ExamError` carried by an `anyhow::Error`, if any
pub fn exam_error(err: &anyhow::Error) -> Option<&ExamError> {
    err.downcast_ref::<ExamError>()
}
