//! Session search history.
//!
//! A bounded list of distinct queries, most recent first. A query that is
//! already present is left where it is: it is neither duplicated nor moved to
//! the front. When a new query would exceed the capacity, the oldest entry is
//! evicted.
//!
//! The history belongs to the caller's session and is passed to the engine
//! explicitly; nothing persists it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_HISTORY_CAPACITY;

/// Bounded, most-recent-first list of distinct queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchHistory {
    /// Create an empty history with the default capacity (10).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding at most `capacity` queries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a query.
    ///
    /// The query is trimmed first. Returns `true` if it was inserted, `false`
    /// if it was blank or already present.
    ///
    /// ```
    /// use lectern_search::SearchHistory;
    ///
    /// let mut history = SearchHistory::new();
    /// assert!(history.record("RAG"));
    /// assert!(history.record("API"));
    /// assert!(!history.record("RAG"));
    /// assert_eq!(history.entries().collect::<Vec<_>>(), vec!["API", "RAG"]);
    /// ```
    pub fn record(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() || self.contains(query) || self.capacity == 0 {
            return false;
        }

        self.entries.push_front(query.to_string());
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                log::debug!("History full, evicted '{evicted}'");
            }
        }
        true
    }

    /// Whether the history already holds `query` (exact match after trimming).
    pub fn contains(&self, query: &str) -> bool {
        let query = query.trim();
        self.entries.iter().any(|e| e == query)
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Entry at `index` (0 = most recent).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.get(0)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
