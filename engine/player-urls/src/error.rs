//! Error types for loading and saving player data

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for player URL operations
pub type Result<T> = std::result::Result<T, PlayerUrlsError>;

/// Errors that can occur while reading, writing or configuring
#[derive(Error, Debug)]
pub enum PlayerUrlsError {
    /// File could not be opened, read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid JSON for the expected shape
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Environment override could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlayerUrlsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path: path.into(), source }
    }
}
