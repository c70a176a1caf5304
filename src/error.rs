use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while generating checkerboards.
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Invalid dimensions {0}")]
    InvalidDimensions(String),
    #[error("Invalid directory {}: {reason}", .path.display())]
    InvalidDirectory { path: PathBuf, reason: String },
    #[error("Conflicting arguments: {0}")]
    ConflictingArguments(String),
    #[error("{0}")]
    Usage(String),
    #[error("Image error for {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{failed} of {total} files failed")]
    BatchFailed { failed: usize, total: usize },
}

impl CheckerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheckerError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        CheckerError::Image {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn directory(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CheckerError::InvalidDirectory {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
