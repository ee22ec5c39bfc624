//! Error types for Folio
//!
//! Library code returns `FolioResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Content file could not be parsed
    #[error("invalid content in {file}: {message}")]
    InvalidContent { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Validation reported errors; nothing was written
    #[error("content has {errors} validation error(s) - run 'folio check' for details")]
    ValidationFailed { errors: usize },

    /// Page template failed to render
    #[error("render error: {0}")]
    Render(#[from] askama::Error),

    /// File watcher could not be set up
    #[error("watch error: {0}")]
    Watch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<notify::Error> for FolioError {
    fn from(err: notify::Error) -> Self {
        FolioError::Watch(err.to_string())
    }
}
