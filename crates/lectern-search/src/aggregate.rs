//! Result grouping.
//!
//! Per-match results arrive in scan order (catalog chapter order, then
//! document order, then match order). The aggregator caps each document at a
//! fixed number of snippets and groups by chapter without reordering
//! anything: there is no relevance ranking beyond the per-document match
//! count that each result carries.

use lectern_content::DocumentRef;
use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_MAX_SNIPPETS_PER_DOCUMENT;

/// One snippet-bearing hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Stable document identifier.
    pub id: String,
    /// Chapter name.
    pub chapter: String,
    /// Document name.
    pub document: String,
    /// Highlighted context snippet.
    pub snippet: String,
    /// Total matches in the document (not just those with snippets).
    pub match_count: usize,
    /// Source path or identifier, for navigation.
    pub path: String,
}

impl SearchResult {
    /// The `(chapter, document)` pair to navigate to.
    pub fn document_ref(&self) -> DocumentRef {
        DocumentRef::new(self.chapter.as_str(), self.document.as_str())
    }

    fn same_document(&self, other: &SearchResult) -> bool {
        self.chapter == other.chapter && self.document == other.document
    }
}

/// Results of one chapter, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterResults {
    /// Chapter name.
    pub chapter: String,
    /// Results in document order, then match order.
    pub results: Vec<SearchResult>,
}

impl ChapterResults {
    /// Number of results in this chapter.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the chapter has no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Caps and groups per-match results.
#[derive(Debug, Clone, Copy)]
pub struct ResultAggregator {
    max_per_document: usize,
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SNIPPETS_PER_DOCUMENT)
    }
}

impl ResultAggregator {
    /// Create an aggregator keeping at most `max_per_document` results per document.
    pub fn new(max_per_document: usize) -> Self {
        Self { max_per_document }
    }

    /// Group results by chapter in first-appearance order.
    ///
    /// Within each document only the first `max_per_document` results are
    /// kept. Nothing is deduplicated across documents or chapters.
    pub fn aggregate<I>(&self, results: I) -> Vec<ChapterResults>
    where
        I: IntoIterator<Item = SearchResult>,
    {
        let mut groups: Vec<ChapterResults> = Vec::new();

        for result in results {
            let index = match groups.iter().position(|g| g.chapter == result.chapter) {
                Some(index) => index,
                None => {
                    groups.push(ChapterResults {
                        chapter: result.chapter.clone(),
                        results: Vec::new(),
                    });
                    groups.len() - 1
                }
            };

            let group = &mut groups[index];
            let kept = group
                .results
                .iter()
                .filter(|r| r.same_document(&result))
                .count();
            if kept < self.max_per_document {
                group.results.push(result);
            }
        }

        groups.retain(|g| !g.is_empty());
        groups
    }
}
