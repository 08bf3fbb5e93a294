//! Search engine facade.
//!
//! [`SearchEngine`] runs one query through its lifecycle:
//!
//! ```text
//! Idle → Validating → Scanning → Aggregating → Done
//! ```
//!
//! - **Validating**: a query shorter than `min_query_chars` after trimming is
//!   rejected. Rejection is an outcome, not an error.
//! - **Scanning**: every searchable catalog document is loaded, matched, and
//!   turned into at most `max_snippets_per_document` highlighted snippets.
//!   A document that fails to load is logged and skipped; it never aborts the
//!   search and is not retried.
//! - **Aggregating**: results are capped and grouped by chapter, and the query
//!   is recorded in the caller's [`SearchHistory`].
//!
//! The engine holds only read-only state (catalog, loader, configuration).
//! History and results belong to the caller.
//!
//! # Example
//!
//! ```rust
//! use lectern_content::{Chapter, DocumentCatalog, MemoryContentLoader};
//! use lectern_search::{SearchEngine, SearchHistory};
//!
//! # tokio_test::block_on(async {
//! let catalog = DocumentCatalog::new(vec![Chapter::new("C1", ["rag.md"])]).unwrap();
//! let loader = MemoryContentLoader::new()
//!     .with_document("C1", "rag.md", "RAG 是检索增强生成。它结合检索与生成。");
//! let engine = SearchEngine::new(catalog, loader);
//!
//! let mut history = SearchHistory::new();
//! let outcome = engine.search("rag", &mut history).await;
//! let results = outcome.results().unwrap();
//! assert_eq!(results.total(), 1);
//! assert_eq!(history.latest(), Some("rag"));
//! # });
//! ```

use std::fmt;
use std::sync::Arc;

use futures::future::join_all;
use lectern_content::{ContentLoader, DocumentCatalog, DocumentRef};
use serde::{Deserialize, Serialize};

use crate::aggregate::{ChapterResults, ResultAggregator, SearchResult};
use crate::highlight::Highlighter;
use crate::history::SearchHistory;
use crate::matcher::Matcher;
use crate::snippet::SnippetExtractor;
use crate::types::SearchConfig;

// ============================================================================
// Outcome types
// ============================================================================

/// Lifecycle phase of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Not started.
    Idle,
    /// Checking the query.
    Validating,
    /// Loading and matching documents.
    Scanning,
    /// Capping, grouping, recording history.
    Aggregating,
    /// Finished.
    Done,
}

impl fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchPhase::Idle => "idle",
            SearchPhase::Validating => "validating",
            SearchPhase::Scanning => "scanning",
            SearchPhase::Aggregating => "aggregating",
            SearchPhase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Why a query was not run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRejection {
    /// The trimmed query.
    pub query: String,
    /// Minimum accepted length in characters.
    pub min_chars: usize,
}

impl fmt::Display for QueryRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "query '{}' is too short (minimum {} characters)",
            self.query, self.min_chars
        )
    }
}

/// A document that was skipped because it could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    /// Chapter name.
    pub chapter: String,
    /// Document name.
    pub document: String,
    /// Machine-readable reason (`not_found`, `empty`, ...).
    pub reason: String,
    /// Human-readable message.
    pub message: String,
}

/// Grouped results of an accepted query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// The trimmed query.
    pub query: String,
    /// Results grouped by chapter, in catalog order.
    pub chapters: Vec<ChapterResults>,
    /// Documents that could not be loaded.
    pub skipped: Vec<SkippedDocument>,
    /// Number of searchable documents examined.
    pub documents_scanned: usize,
}

impl SearchResults {
    /// Total number of snippet-bearing results.
    pub fn total(&self) -> usize {
        self.chapters.iter().map(ChapterResults::len).sum()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// All results in order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchResult> + '_ {
        self.chapters.iter().flat_map(|c| c.results.iter())
    }

    fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            chapters: Vec::new(),
            skipped: Vec::new(),
            documents_scanned: 0,
        }
    }
}

/// Outcome of [`SearchEngine::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The query was too short; nothing was scanned.
    Rejected(QueryRejection),
    /// The query ran; results may be empty.
    Completed(SearchResults),
}

impl SearchOutcome {
    /// Results, if the query was accepted.
    pub fn results(&self) -> Option<&SearchResults> {
        match self {
            SearchOutcome::Completed(results) => Some(results),
            SearchOutcome::Rejected(_) => None,
        }
    }

    /// Whether the query was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, SearchOutcome::Rejected(_))
    }

    /// Total results (zero when rejected).
    pub fn total(&self) -> usize {
        self.results().map_or(0, SearchResults::total)
    }
}

// ============================================================================
// SearchEngine
// ============================================================================

/// Per-document scan result.
enum DocumentScan {
    Matched(Vec<SearchResult>),
    NoMatch,
    Skipped(SkippedDocument),
}

/// Query-time search over a catalog.
pub struct SearchEngine {
    catalog: DocumentCatalog,
    loader: Arc<dyn ContentLoader>,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine with default configuration.
    pub fn new<L: ContentLoader + 'static>(catalog: DocumentCatalog, loader: L) -> Self {
        Self::from_shared(catalog, Arc::new(loader))
    }

    /// Create an engine around a shared loader.
    pub fn from_shared(catalog: DocumentCatalog, loader: Arc<dyn ContentLoader>) -> Self {
        Self {
            catalog,
            loader,
            config: SearchConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// The catalog being searched.
    pub fn catalog(&self) -> &DocumentCatalog {
        &self.catalog
    }

    /// The content loader.
    pub fn loader(&self) -> &dyn ContentLoader {
        self.loader.as_ref()
    }

    /// Active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Highlighter configured with this engine's markers.
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(
            self.config.highlight_open.as_str(),
            self.config.highlight_close.as_str(),
        )
    }

    /// A fresh history sized from the configuration.
    pub fn new_history(&self) -> SearchHistory {
        SearchHistory::with_capacity(self.config.history_capacity)
    }

    /// Run a query and record it in `history` if it was accepted.
    pub async fn search(&self, raw_query: &str, history: &mut SearchHistory) -> SearchOutcome {
        let outcome = self.execute(raw_query).await;
        if let SearchOutcome::Completed(results) = &outcome
            && history.record(&results.query)
        {
            log::debug!("Recorded '{}' in search history", results.query);
        }
        outcome
    }

    /// Run a query without touching any history.
    pub async fn execute(&self, raw_query: &str) -> SearchOutcome {
        let mut phase = SearchPhase::Idle;
        let query = raw_query.trim();

        advance(&mut phase, SearchPhase::Validating, query);
        let min_chars = self.config.min_query_chars.max(1);
        if query.chars().count() < min_chars {
            log::debug!("Rejected query '{query}': shorter than {min_chars} characters");
            advance(&mut phase, SearchPhase::Done, query);
            return SearchOutcome::Rejected(QueryRejection {
                query: query.to_string(),
                min_chars,
            });
        }

        let matcher = match Matcher::new(query) {
            Ok(matcher) => matcher,
            Err(e) => {
                log::warn!("Could not compile query '{query}': {e}");
                advance(&mut phase, SearchPhase::Done, query);
                return SearchOutcome::Completed(SearchResults::empty(query));
            }
        };

        advance(&mut phase, SearchPhase::Scanning, query);
        let documents: Vec<DocumentRef> = self.catalog.searchable_documents().collect();
        let documents_scanned = documents.len();
        let scans = join_all(
            documents
                .into_iter()
                .map(|doc| self.scan_document(doc, &matcher)),
        )
        .await;

        advance(&mut phase, SearchPhase::Aggregating, query);
        let mut hits = Vec::new();
        let mut skipped = Vec::new();
        for scan in scans {
            match scan {
                DocumentScan::Matched(results) => hits.extend(results),
                DocumentScan::NoMatch => {}
                DocumentScan::Skipped(doc) => skipped.push(doc),
            }
        }
        let chapters =
            ResultAggregator::new(self.config.max_snippets_per_document).aggregate(hits);

        let results = SearchResults {
            query: query.to_string(),
            chapters,
            skipped,
            documents_scanned,
        };
        log::debug!(
            "Query '{query}': {} results in {} chapters, {} documents skipped",
            results.total(),
            results.chapters.len(),
            results.skipped.len()
        );

        advance(&mut phase, SearchPhase::Done, query);
        SearchOutcome::Completed(results)
    }

    async fn scan_document(&self, doc: DocumentRef, matcher: &Matcher) -> DocumentScan {
        let text = match self.loader.load(&doc).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Skipping {doc}: {e}");
                return DocumentScan::Skipped(SkippedDocument {
                    chapter: doc.chapter,
                    document: doc.name,
                    reason: e.reason().to_string(),
                    message: e.to_string(),
                });
            }
        };

        let offsets = matcher.find_all(&text);
        if offsets.is_empty() {
            return DocumentScan::NoMatch;
        }

        let match_count = offsets.len();
        log::debug!("{doc}: {match_count} matches");

        let kept = &offsets[..match_count.min(self.config.max_snippets_per_document)];
        let extractor = SnippetExtractor::new(self.config.context_chars);
        let highlighter = self.highlighter();
        let path = self.loader.source_path(&doc);
        let id = doc.id();

        let results = extractor
            .extract_many(&text, matcher, kept)
            .into_iter()
            .map(|snippet| SearchResult {
                id: id.clone(),
                chapter: doc.chapter.clone(),
                document: doc.name.clone(),
                snippet: highlighter.highlight(&snippet, matcher),
                match_count,
                path: path.clone(),
            })
            .collect();

        DocumentScan::Matched(results)
    }
}

impl fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine")
            .field("loader", &self.loader.name())
            .field("chapters", &self.catalog.chapters().len())
            .field("documents", &self.catalog.len())
            .finish()
    }
}

fn advance(phase: &mut SearchPhase, next: SearchPhase, query: &str) {
    log::trace!("Query '{query}': {phase} → {next}");
    *phase = next;
}

// ============================================================================
// Tests
// ============================================================================
