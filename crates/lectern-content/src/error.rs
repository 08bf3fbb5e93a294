//! Error types for lectern-content

use thiserror::Error;

/// Result type alias for lectern-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lectern-content
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from lectern-core
    #[error("Core error: {0}")]
    Core(#[from] lectern_core::Error),

    /// A document could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Why a single document could not be turned into text.
///
/// The search engine treats every variant the same way (skip the document and
/// keep scanning); the distinction matters for diagnostics and for the
/// `open` command.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadError {
    /// No file exists for the document
    #[error("document not found: {path}")]
    NotFound {
        /// Source path or identifier
        path: String,
    },

    /// The file has no content, or only whitespace
    #[error("document is empty: {path}")]
    Empty {
        /// Source path or identifier
        path: String,
    },

    /// The file is not valid UTF-8
    #[error("document is not valid UTF-8: {path}")]
    UnreadableEncoding {
        /// Source path or identifier
        path: String,
    },

    /// The process may not read the file
    #[error("permission denied reading {path}")]
    PermissionDenied {
        /// Source path or identifier
        path: String,
    },

    /// Any other I/O failure
    #[error("failed to read {path}: {source}")]
    Io {
        /// Source path or identifier
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Map an I/O error onto the typed taxonomy.
    pub fn from_io(source: std::io::Error, path: impl Into<String>) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            _ => LoadError::Io { path, source },
        }
    }

    /// Short machine-readable reason, used in logs and JSON output.
    pub fn reason(&self) -> &'static str {
        match self {
            LoadError::NotFound { .. } => "not_found",
            LoadError::Empty { .. } => "empty",
            LoadError::UnreadableEncoding { .. } => "unreadable_encoding",
            LoadError::PermissionDenied { .. } => "permission_denied",
            LoadError::Io { .. } => "io",
        }
    }
}

/// Decode raw bytes into document text.
///
/// Strips a UTF-8 byte-order mark, rejects non-UTF-8 input and documents that
/// are empty or whitespace only.
pub(crate) fn decode_text(bytes: Vec<u8>, path: &str) -> std::result::Result<String, LoadError> {
    let mut text = String::from_utf8(bytes).map_err(|_| LoadError::UnreadableEncoding {
        path: path.to_string(),
    })?;

    if text.starts_with('\u{feff}') {
        text.drain(..'\u{feff}'.len_utf8());
    }

    if text.trim().is_empty() {
        return Err(LoadError::Empty {
            path: path.to_string(),
        });
    }

    Ok(text)
}
