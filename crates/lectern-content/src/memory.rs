//! In-memory content loader.
//!
//! Serves document text from a map. Used by tests and by callers that embed
//! a corpus in the binary. Entries can also be marked unreadable to exercise
//! the failure paths of a scan.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::catalog::DocumentRef;
use crate::error::{LoadError, decode_text};
use crate::loader::ContentLoader;

#[derive(Debug, Clone)]
enum Entry {
    Bytes(Vec<u8>),
    Denied,
}

/// A [`ContentLoader`] backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentLoader {
    entries: HashMap<DocumentRef, Entry>,
}

impl MemoryContentLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a document's text.
    pub fn insert(&mut self, doc: DocumentRef, text: impl Into<String>) {
        self.entries
            .insert(doc, Entry::Bytes(text.into().into_bytes()));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_document(
        mut self,
        chapter: &str,
        name: &str,
        text: impl Into<String>,
    ) -> Self {
        self.insert(DocumentRef::new(chapter, name), text);
        self
    }

    /// Add raw bytes, which may not be valid UTF-8.
    pub fn insert_bytes(&mut self, doc: DocumentRef, bytes: Vec<u8>) {
        self.entries.insert(doc, Entry::Bytes(bytes));
    }

    /// Make loading this document fail with a permission error.
    pub fn deny(&mut self, doc: DocumentRef) {
        self.entries.insert(doc, Entry::Denied);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the loader holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ContentLoader for MemoryContentLoader {
    async fn load(&self, doc: &DocumentRef) -> Result<String, LoadError> {
        let path = self.source_path(doc);
        match self.entries.get(doc) {
            Some(Entry::Bytes(bytes)) => decode_text(bytes.clone(), &path),
            Some(Entry::Denied) => Err(LoadError::PermissionDenied { path }),
            None => Err(LoadError::NotFound { path }),
        }
    }

    fn source_path(&self, doc: &DocumentRef) -> String {
        format!("memory://{doc}")
    }

    fn name(&self) -> &str {
        "memory"
    }
}
