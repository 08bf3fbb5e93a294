//! Case-insensitive literal matching.
//!
//! The query is plain text, never a pattern: it is escaped before being
//! compiled, so `C++`, `a.b` or `(RAG)` match themselves. Matching uses
//! Unicode simple case folding and reports byte offsets into the original,
//! unmodified text.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// A compiled, case-insensitive literal query.
#[derive(Debug, Clone)]
pub struct Matcher {
    query: String,
    pattern: Regex,
}

impl Matcher {
    /// Compile a matcher for `query`.
    ///
    /// # Errors
    ///
    /// Fails only if the escaped query exceeds the regex size limit.
    pub fn new(query: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            query: query.to_string(),
            pattern,
        })
    }

    /// The original query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Length of the query in characters.
    pub fn query_chars(&self) -> usize {
        self.query.chars().count()
    }

    /// The compiled pattern.
    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Byte offsets of every match start, in document order.
    ///
    /// Overlapping occurrences are each reported: after a match at `i` the
    /// scan resumes one character past `i`, not past the end of the match.
    ///
    /// ```
    /// use lectern_search::Matcher;
    ///
    /// let matcher = Matcher::new("aa").unwrap();
    /// assert_eq!(matcher.find_all("AAa"), vec![0, 1]);
    /// ```
    pub fn find_all(&self, text: &str) -> Vec<usize> {
        if self.query.is_empty() {
            return Vec::new();
        }

        let mut offsets = Vec::new();
        let mut from = 0;
        while let Some(found) = self.pattern.find_at(text, from) {
            let start = found.start();
            offsets.push(start);
            let step = text[start..].chars().next().map_or(1, char::len_utf8);
            from = start + step;
            if from > text.len() {
                break;
            }
        }
        offsets
    }

    /// Whether `text` contains the query at least once.
    pub fn is_match(&self, text: &str) -> bool {
        !self.query.is_empty() && self.pattern.is_match(text)
    }
}

/// Find every case-insensitive occurrence of `query` in `text`.
///
/// Returns an empty vector for an empty query or when nothing matches.
pub fn find_all(text: &str, query: &str) -> Vec<usize> {
    match Matcher::new(query) {
        Ok(matcher) => matcher.find_all(text),
        Err(e) => {
            log::warn!("Could not compile query '{query}': {e}");
            Vec::new()
        }
    }
}
