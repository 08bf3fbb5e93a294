//! Query-time search over Lectern course content.
//!
//! There is no index. Every query is a linear scan of the searchable catalog
//! documents, loaded fresh through a [`ContentLoader`](lectern_content::ContentLoader).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     lectern-search                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  SearchEngine (validate → scan → aggregate → record)     │
//! ├──────────────────────────────────────────────────────────┤
//! │  Matcher           case-insensitive literal offsets      │
//! │  SnippetExtractor  sentence-anchored context             │
//! │  Highlighter       emphasis markers around matches       │
//! │  ResultAggregator  per-document cap, chapter grouping    │
//! │  SearchHistory     bounded distinct recent queries       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use lectern_search::{extract, find_all, highlight};
//!
//! let text = "RAG 是检索增强生成。它结合检索与生成。";
//! let offsets = find_all(text, "rag");
//! assert_eq!(offsets, vec![0]);
//!
//! let snippet = extract(text, "rag", offsets[0]);
//! assert_eq!(highlight(&snippet, "rag"), "**RAG** 是检索增强生成。它结合检索与生成");
//! ```

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod history;
pub mod matcher;
pub mod snippet;
pub mod types;

#[cfg(test)]
mod proptests;

pub use aggregate::{ChapterResults, ResultAggregator, SearchResult};
pub use engine::{
    QueryRejection, SearchEngine, SearchOutcome, SearchPhase, SearchResults, SkippedDocument,
};
pub use error::{Error, Result};
pub use highlight::{Highlighter, highlight};
pub use history::SearchHistory;
pub use matcher::{Matcher, find_all};
pub use snippet::{SnippetExtractor, extract, split_sentences};
pub use types::SearchConfig;
