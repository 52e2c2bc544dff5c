//! Log tail error types.

use thiserror::Error;

/// Errors that can occur while tailing a log source.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(String),

    #[error("invalid regex pattern: {0}")]
    InvalidPattern(String),

    #[error("file not found or is not a regular file: {0}")]
    SourceNotFound(String),

    #[error("failed to read {source_name}: {message}")]
    SourceRead {
        source_name: String,
        message: String,
    },

    #[error("failed to encode result: {0}")]
    Serialization(String),
}

impl LogError {
    pub fn read(source_name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::SourceRead {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    /// Stable machine-readable kind, surfaced in failed tool results.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "missing_parameter",
            Self::InvalidPattern(_) => "invalid_pattern",
            Self::SourceNotFound(_) => "source_not_found",
            Self::SourceRead { .. } => "source_read_error",
            Self::Serialization(_) => "serialization_error",
        }
    }
}

impl From<serde_json::Error> for LogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Convenience alias for log tail results.
pub type LogResult<T> = Result<T, LogError>;
