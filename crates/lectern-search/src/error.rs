//! Error types for lectern-search

use thiserror::Error;

/// Result type alias for lectern-search operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lectern-search.
///
/// None of these escape [`SearchEngine::search`](crate::SearchEngine::search):
/// a query either completes (possibly with no results) or is rejected as too
/// short.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from lectern-core
    #[error("Core error: {0}")]
    Core(#[from] lectern_core::Error),

    /// Error from lectern-content
    #[error("Content error: {0}")]
    Content(#[from] lectern_content::Error),

    /// The escaped query could not be compiled (e.g. exceeds the size limit)
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
