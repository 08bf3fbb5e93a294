//! Error types for lectern-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for lectern operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across Lectern crates.
///
/// Search itself never fails: per-document problems are contained inside the
/// scan. These variants cover the surrounding plumbing (configuration, catalog
/// files, filesystem access).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without path context
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        /// File the operation was applied to
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Malformed or inconsistent document catalog
    #[error("Catalog error: {message}")]
    Catalog {
        /// What is wrong with the catalog
        message: String,
    },

    /// A named item does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of item (e.g. "chapter", "document")
        kind: String,
        /// Identifier that was looked up
        id: String,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new catalog error.
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Error::Catalog {
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<K, I>(kind: K, id: I) -> Self
    where
        K: Into<String>,
        I: Into<String>,
    {
        Error::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns `true` if this is a not-found error of any kind.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Io(e) | Error::IoWithPath { source: e, .. } => {
                e.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
