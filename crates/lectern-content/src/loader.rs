//! Content loading.
//!
//! [`ContentLoader`] is the seam between the search engine and storage. The
//! engine never touches the filesystem directly: it asks a loader for the
//! text of a [`DocumentRef`] and treats any [`LoadError`] as "skip this
//! document".

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::catalog::DocumentRef;
use crate::error::{LoadError, decode_text};

/// Source of document text.
#[async_trait]
pub trait ContentLoader: Send + Sync {
    /// Load the full text of a document.
    async fn load(&self, doc: &DocumentRef) -> Result<String, LoadError>;

    /// Identifier of the document's source (a file path for filesystem
    /// loaders), reported with search results for navigation.
    fn source_path(&self, doc: &DocumentRef) -> String;

    /// Loader name for diagnostics.
    fn name(&self) -> &str;
}

/// Loads documents from `<root>/<chapter>/<document>`.
#[derive(Debug, Clone)]
pub struct FsContentLoader {
    root: PathBuf,
}

impl FsContentLoader {
    /// Create a loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Content root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path of a document.
    pub fn path_for(&self, doc: &DocumentRef) -> PathBuf {
        self.root.join(&doc.chapter).join(&doc.name)
    }
}

#[async_trait]
impl ContentLoader for FsContentLoader {
    async fn load(&self, doc: &DocumentRef) -> Result<String, LoadError> {
        let path = self.path_for(doc);
        let display = path.display().to_string();

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| LoadError::from_io(e, display.as_str()))?;

        decode_text(bytes, &display)
    }

    fn source_path(&self, doc: &DocumentRef) -> String {
        self.path_for(doc).display().to_string()
    }

    fn name(&self) -> &str {
        "filesystem"
    }
}
