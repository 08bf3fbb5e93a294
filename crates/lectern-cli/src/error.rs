//! Error types for lectern-cli

use thiserror::Error;

/// Result type alias for lectern-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lectern-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from lectern-core
    #[error("Core error: {0}")]
    Core(#[from] lectern_core::Error),

    /// Error from lectern-content
    #[error("Content error: {0}")]
    Content(#[from] lectern_content::Error),

    /// Error from lectern-search
    #[error("Search error: {0}")]
    Search(#[from] lectern_search::Error),

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<lectern_content::LoadError> for Error {
    fn from(err: lectern_content::LoadError) -> Self {
        Error::Content(err.into())
    }
}
