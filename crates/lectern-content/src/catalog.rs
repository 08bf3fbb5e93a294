//! Document catalog: the ordered chapter → document mapping.
//!
//! The catalog defines the corpus. Order is significant everywhere: chapters
//! are iterated in declaration order, and documents within a chapter likewise.
//! Search results and prev/next navigation both follow this order.
//!
//! Catalogs are immutable once built. They can be constructed in code,
//! parsed from TOML, or taken from the built-in course outline
//! ([`DocumentCatalog::default`]).
//!
//! # TOML format
//!
//! ```toml
//! [[chapters]]
//! name = "C1 Introduction"
//! documents = ["1.Overview.md", "2.Setup.md"]
//!
//! [[chapters]]
//! name = "C2 Using the API"
//! documents = ["1.Basics.md", "2.Calling the API.ipynb"]
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use lectern_core::{Error, Result, document_id};
use serde::{Deserialize, Serialize};

use crate::kind::DocumentKind;

/// Identifies one document: its chapter and file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Chapter the document belongs to.
    pub chapter: String,
    /// Document file name within the chapter.
    pub name: String,
}

impl DocumentRef {
    /// Create a document reference.
    pub fn new(chapter: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            chapter: chapter.into(),
            name: name.into(),
        }
    }

    /// Kind of this document, from its file extension.
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_name(&self.name)
    }

    /// Stable kebab-case identifier (`chapter-id/document-id`).
    pub fn id(&self) -> String {
        document_id(&self.chapter, &self.name)
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chapter, self.name)
    }
}

/// A named chapter and its ordered documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter name, unique within the catalog.
    pub name: String,
    /// Document file names in reading order.
    #[serde(default)]
    pub documents: Vec<String>,
}

impl Chapter {
    /// Create a chapter from a name and document names.
    pub fn new<I, S>(name: impl Into<String>, documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            documents: documents.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered, validated chapter → document mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCatalog {
    chapters: Vec<Chapter>,
}

impl DocumentCatalog {
    /// Build a catalog, validating names.
    ///
    /// # Errors
    ///
    /// Returns a catalog error for empty chapter or document names, duplicate
    /// chapter names, or a document listed twice in the same chapter.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self> {
        let mut seen_chapters = HashSet::new();
        for chapter in &chapters {
            if chapter.name.trim().is_empty() {
                return Err(Error::catalog("chapter name must not be empty"));
            }
            if !seen_chapters.insert(chapter.name.as_str()) {
                return Err(Error::catalog(format!(
                    "duplicate chapter '{}'",
                    chapter.name
                )));
            }

            let mut seen_documents = HashSet::new();
            for document in &chapter.documents {
                if document.trim().is_empty() {
                    return Err(Error::catalog(format!(
                        "empty document name in chapter '{}'",
                        chapter.name
                    )));
                }
                if !seen_documents.insert(document.as_str()) {
                    return Err(Error::catalog(format!(
                        "document '{document}' listed twice in chapter '{}'",
                        chapter.name
                    )));
                }
            }
        }

        Ok(Self { chapters })
    }

    /// Parse and validate a catalog from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: DocumentCatalog = toml::from_str(content)?;
        Self::new(parsed.chapters)
    }

    /// Read a catalog TOML file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io_with_path(e, path))?;
        let catalog = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded catalog from {}: {} chapters, {} documents",
            path.display(),
            catalog.chapters.len(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::catalog(e.to_string()))
    }

    /// Chapters in declaration order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Look up a chapter by name.
    pub fn chapter(&self, name: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.name == name)
    }

    /// All documents in catalog order.
    pub fn documents(&self) -> impl Iterator<Item = DocumentRef> + '_ {
        self.chapters.iter().flat_map(|chapter| {
            chapter
                .documents
                .iter()
                .map(move |name| DocumentRef::new(chapter.name.as_str(), name.as_str()))
        })
    }

    /// Searchable documents (Markdown, plain text) in catalog order.
    pub fn searchable_documents(&self) -> impl Iterator<Item = DocumentRef> + '_ {
        self.documents().filter(|doc| doc.kind().is_searchable())
    }

    /// Whether the catalog lists this document.
    pub fn contains(&self, doc: &DocumentRef) -> bool {
        self.chapter(&doc.chapter)
            .is_some_and(|c| c.documents.iter().any(|d| *d == doc.name))
    }

    /// Resolve a `(chapter, document)` pair to a reference.
    ///
    /// # Errors
    ///
    /// Returns a not-found error naming whichever part is missing.
    pub fn resolve(&self, chapter: &str, document: &str) -> Result<DocumentRef> {
        let found = self
            .chapter(chapter)
            .ok_or_else(|| Error::not_found("chapter", chapter))?;
        if !found.documents.iter().any(|d| d == document) {
            return Err(Error::not_found("document", format!("{chapter}/{document}")));
        }
        Ok(DocumentRef::new(chapter, document))
    }

    /// The document after `doc` in reading order, crossing chapter boundaries.
    ///
    /// Returns `None` at the end of the course or if `doc` is not listed.
    pub fn next(&self, doc: &DocumentRef) -> Option<DocumentRef> {
        let mut docs = self.documents();
        docs.position(|d| d == *doc)?;
        docs.next()
    }

    /// The document before `doc` in reading order, crossing chapter boundaries.
    ///
    /// Returns `None` at the start of the course or if `doc` is not listed.
    pub fn previous(&self, doc: &DocumentRef) -> Option<DocumentRef> {
        let mut prev = None;
        for current in self.documents() {
            if current == *doc {
                return prev;
            }
            prev = Some(current);
        }
        None
    }

    /// Total number of documents.
    pub fn len(&self) -> usize {
        self.chapters.iter().map(|c| c.documents.len()).sum()
    }

    /// Whether the catalog has no documents.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DocumentCatalog {
    /// The built-in course outline.
    fn default() -> Self {
        Self {
            chapters: vec![
                Chapter::new(
                    "C1 大型语言模型 LLM 介绍",
                    [
                        "1.大型语言模型 LLM 理论简介.md",
                        "2.检索增强生成 RAG 简介.md",
                        "3.LangChain 简介.md",
                        "4.开发 LLM 应用的整体流程.md",
                        "5.阿里云服务器的基本使用.md",
                        "6.GitHub Codespaces 的基本使用（选修）.md",
                        "7.环境配置.md",
                    ],
                ),
                Chapter::new(
                    "C2 使用 LLM API 开发应用",
                    [
                        "1. 基本概念.md",
                        "2. 使用 LLM API.ipynb",
                        "3. Prompt Engineering.ipynb",
                    ],
                ),
                Chapter::new(
                    "C3 搭建知识库",
                    [
                        "1.词向量及向量知识库介绍.md",
                        "2.使用 Embedding API.ipynb",
                        "3.数据处理.ipynb",
                        "4.搭建并使用向量数据库.ipynb",
                    ],
                ),
                Chapter::new(
                    "C4 构建 RAG 应用",
                    [
                        "1.LLM 接入 LangChain.ipynb",
                        "2.构建检索问答链.ipynb",
                        "3.部署知识库助手.ipynb",
                    ],
                ),
                Chapter::new(
                    "C5 系统评估与优化",
                    [
                        "1.如何评估 LLM 应用.ipynb",
                        "2.评估并优化生成部分.ipynb",
                        "3.评估并优化检索部分.md",
                    ],
                ),
            ],
        }
    }
}
