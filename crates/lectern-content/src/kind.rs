//! Document kind classification.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Type of a catalog document, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// `.md` / `.markdown`
    Markdown,
    /// `.txt`
    PlainText,
    /// `.ipynb` (JSON cells, not scanned)
    Notebook,
    /// Anything else
    Other,
}

impl DocumentKind {
    /// Classify a document by its file name.
    ///
    /// ```
    /// use lectern_content::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::from_name("2.RAG.md"), DocumentKind::Markdown);
    /// assert_eq!(DocumentKind::from_name("3.Prompt.ipynb"), DocumentKind::Notebook);
    /// assert!(!DocumentKind::from_name("slides.pdf").is_searchable());
    /// ```
    pub fn from_name(name: &str) -> Self {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("md" | "markdown") => DocumentKind::Markdown,
            Some("txt") => DocumentKind::PlainText,
            Some("ipynb") => DocumentKind::Notebook,
            _ => DocumentKind::Other,
        }
    }

    /// Whether documents of this kind are scanned by search.
    pub fn is_searchable(self) -> bool {
        matches!(self, DocumentKind::Markdown | DocumentKind::PlainText)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Markdown => write!(f, "markdown"),
            DocumentKind::PlainText => write!(f, "text"),
            DocumentKind::Notebook => write!(f, "notebook"),
            DocumentKind::Other => write!(f, "other"),
        }
    }
}
