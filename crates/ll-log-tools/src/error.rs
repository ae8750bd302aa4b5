//! Log analysis error types.

use thiserror::Error;

/// Errors that abort an analysis run.
///
/// Per-line parse failures never surface here; they degrade to fallback
/// records inside the parser.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("source not found: {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl LogError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.to_string())
        } else {
            Self::Io(format!("{path}: {err}"))
        }
    }
}

/// Convenience alias for log analysis results.
pub type LogResult<T> = Result<T, LogError>;
