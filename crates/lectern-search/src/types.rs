//! Search configuration.

use serde::{Deserialize, Serialize};

/// Minimum accepted query length, in characters, after trimming.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Maximum snippet-bearing results per document.
pub const DEFAULT_MAX_SNIPPETS_PER_DOCUMENT: usize = 3;

/// Characters of context on each side of a match in the fallback window.
pub const DEFAULT_CONTEXT_CHARS: usize = 100;

/// Number of distinct queries kept in a session history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Default emphasis marker (Markdown bold).
pub const DEFAULT_HIGHLIGHT_MARKER: &str = "**";

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Queries shorter than this (after trimming) are rejected.
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// Maximum snippets emitted per document.
    #[serde(default = "default_max_snippets_per_document")]
    pub max_snippets_per_document: usize,

    /// Fallback window size on each side of a match, in characters.
    #[serde(default = "default_context_chars")]
    pub context_chars: usize,

    /// Session history capacity.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Marker inserted before each highlighted match.
    #[serde(default = "default_highlight_marker")]
    pub highlight_open: String,

    /// Marker inserted after each highlighted match.
    #[serde(default = "default_highlight_marker")]
    pub highlight_close: String,

    /// Terms offered when a search finds nothing.
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
}

fn default_min_query_chars() -> usize {
    DEFAULT_MIN_QUERY_CHARS
}

fn default_max_snippets_per_document() -> usize {
    DEFAULT_MAX_SNIPPETS_PER_DOCUMENT
}

fn default_context_chars() -> usize {
    DEFAULT_CONTEXT_CHARS
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_highlight_marker() -> String {
    DEFAULT_HIGHLIGHT_MARKER.to_string()
}

fn default_suggestions() -> Vec<String> {
    ["RAG", "API", "LangChain", "向量数据库", "大模型", "提示工程"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: default_min_query_chars(),
            max_snippets_per_document: default_max_snippets_per_document(),
            context_chars: default_context_chars(),
            history_capacity: default_history_capacity(),
            highlight_open: default_highlight_marker(),
            highlight_close: default_highlight_marker(),
            suggestions: default_suggestions(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
