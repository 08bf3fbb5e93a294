//! Match highlighting.
//!
//! Every case-insensitive occurrence of the query in a snippet is wrapped in
//! emphasis markers in one non-overlapping pass. Matched text keeps its
//! original casing.

use regex::{Captures, Regex, RegexBuilder};

use crate::error::Result;
use crate::matcher::Matcher;
use crate::types::DEFAULT_HIGHLIGHT_MARKER;

/// Wraps query occurrences in a pair of markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    open: String,
    close: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_MARKER, DEFAULT_HIGHLIGHT_MARKER)
    }
}

impl Highlighter {
    /// Create a highlighter with custom markers.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Opening marker.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Closing marker.
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Wrap every occurrence of the matcher's query in `snippet`.
    ///
    /// ```
    /// use lectern_search::{Highlighter, Matcher};
    ///
    /// let matcher = Matcher::new("rag").unwrap();
    /// let marked = Highlighter::default().highlight("RAG and rag", &matcher);
    /// assert_eq!(marked, "**RAG** and **rag**");
    /// ```
    pub fn highlight(&self, snippet: &str, matcher: &Matcher) -> String {
        matcher
            .pattern()
            .replace_all(snippet, |caps: &Captures<'_>| {
                format!("{}{}{}", self.open, &caps[0], self.close)
            })
            .into_owned()
    }

    /// Remove markers added by [`highlight`](Self::highlight).
    ///
    /// Only markers that enclose an occurrence of the query are removed, so
    /// marker-like text already present in the document survives.
    ///
    /// # Errors
    ///
    /// Fails only if the combined pattern exceeds the regex size limit.
    pub fn strip(&self, text: &str, matcher: &Matcher) -> Result<String> {
        let pattern = self.marked_pattern(matcher)?;
        Ok(pattern.replace_all(text, "$m").into_owned())
    }

    fn marked_pattern(&self, matcher: &Matcher) -> Result<Regex> {
        let source = format!(
            "{}(?P<m>{}){}",
            regex::escape(&self.open),
            regex::escape(matcher.query()),
            regex::escape(&self.close)
        );
        Ok(RegexBuilder::new(&source).case_insensitive(true).build()?)
    }
}

/// Highlight `query` in `snippet` with the default markers.
pub fn highlight(snippet: &str, query: &str) -> String {
    match Matcher::new(query) {
        Ok(matcher) if !query.is_empty() => Highlighter::default().highlight(snippet, &matcher),
        Ok(_) => snippet.to_string(),
        Err(e) => {
            log::warn!("Could not compile query '{query}': {e}");
            snippet.to_string()
        }
    }
}
