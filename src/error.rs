use std::io;

use thiserror::Error;

/// Library-wide error type for mmpgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure. The run halts at the first write rejection;
    /// files already written stay on disk.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A template could not be rendered with the supplied values.
    #[error("Failed to render template '{template}': {source}")]
    Render {
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },

    /// UID token is not renderable as single-line text.
    #[error("Invalid UID token '{0}': must be non-empty text without control characters")]
    InvalidUid(String),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Render { .. } | AppError::InvalidUid(_) => io::ErrorKind::InvalidInput,
        }
    }
}
