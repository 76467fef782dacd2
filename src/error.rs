use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Custom error type for the FontPrep application
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Invalid file or directory path
    #[error("invalid path: '{}' does not exist or is not usable", .0.display())]
    InvalidPath(PathBuf),
    /// Font parsing or processing errors
    #[error("font error: {0}")]
    Font(String),
    /// Manifest serialization errors
    #[error("manifest error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for FontPrep operations
pub type Result<T> = std::result::Result<T, Error>;
