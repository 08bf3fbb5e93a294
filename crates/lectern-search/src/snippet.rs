//! Snippet extraction.
//!
//! A snippet is the human-readable context shown for a match. The text is
//! split into sentences on `。`, `！`, `？` and newline. The first sentence
//! that contains the query (case-insensitively) is the *anchor*, and the
//! snippet is the anchor plus at most one sentence on each side, clipped at
//! the document boundaries.
//!
//! The anchor is document-wide: every match in a document anchors to the same
//! first query-bearing sentence, whatever its own offset. When no single
//! sentence contains the query (the query itself spans a terminator), the
//! snippet falls back to a character window around the match offset.
//!
//! Snippets are always contiguous slices of the source text. Context
//! sentences keep the terminator that separated them in the document.

use crate::matcher::Matcher;
use crate::types::DEFAULT_CONTEXT_CHARS;

/// Sentence terminators. Discarded when splitting.
pub const SENTENCE_TERMINATORS: [char; 4] = ['。', '！', '？', '\n'];

/// One sentence as a byte range of the source text (terminator excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Sentence text.
    pub text: &'a str,
}

/// Split `text` into sentences in a single pass.
///
/// Like a delimiter split, this yields an empty trailing sentence when the
/// text ends with a terminator, and empty sentences between adjacent
/// terminators.
///
/// ```
/// use lectern_search::snippet::split_sentences;
///
/// let parts: Vec<&str> = split_sentences("一。二！三")
///     .iter()
///     .map(|s| s.text)
///     .collect();
/// assert_eq!(parts, vec!["一", "二", "三"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        if SENTENCE_TERMINATORS.contains(&ch) {
            sentences.push(Sentence {
                start,
                end: i,
                text: &text[start..i],
            });
            start = i + ch.len_utf8();
        }
    }
    sentences.push(Sentence {
        start,
        end: text.len(),
        text: &text[start..],
    });
    sentences
}

/// Builds context snippets around matches.
#[derive(Debug, Clone, Copy)]
pub struct SnippetExtractor {
    context_chars: usize,
}

impl Default for SnippetExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_CHARS)
    }
}

impl SnippetExtractor {
    /// Create an extractor with the given fallback window size.
    pub fn new(context_chars: usize) -> Self {
        Self { context_chars }
    }

    /// Extract the snippet for one match.
    pub fn extract(&self, text: &str, matcher: &Matcher, match_offset: usize) -> String {
        let sentences = split_sentences(text);
        self.extract_with(text, &sentences, matcher, match_offset)
    }

    /// Extract snippets for several matches of the same document, splitting
    /// the text only once.
    pub fn extract_many(&self, text: &str, matcher: &Matcher, offsets: &[usize]) -> Vec<String> {
        let sentences = split_sentences(text);
        offsets
            .iter()
            .map(|&offset| self.extract_with(text, &sentences, matcher, offset))
            .collect()
    }

    fn extract_with(
        &self,
        text: &str,
        sentences: &[Sentence<'_>],
        matcher: &Matcher,
        match_offset: usize,
    ) -> String {
        match anchor_index(sentences, matcher) {
            Some(anchor) => {
                let first = anchor.saturating_sub(1);
                let last = (anchor + 2).min(sentences.len()) - 1;
                text[sentences[first].start..sentences[last].end]
                    .trim()
                    .to_string()
            }
            None => {
                let after = self.context_chars + matcher.query_chars();
                char_window(text, match_offset, self.context_chars, after).to_string()
            }
        }
    }
}

/// Extract a snippet with the default window size.
pub fn extract(text: &str, query: &str, match_offset: usize) -> String {
    match Matcher::new(query) {
        Ok(matcher) => SnippetExtractor::default().extract(text, &matcher, match_offset),
        Err(e) => {
            log::warn!("Could not compile query '{query}': {e}");
            String::new()
        }
    }
}

/// Index of the first sentence containing the query.
fn anchor_index(sentences: &[Sentence<'_>], matcher: &Matcher) -> Option<usize> {
    sentences.iter().position(|s| matcher.is_match(s.text))
}

/// Slice of `text` spanning `before` characters before `offset` and `after`
/// characters from `offset`, clipped to the text.
fn char_window(text: &str, offset: usize, before: usize, after: usize) -> &str {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }

    let start = text[..offset]
        .char_indices()
        .rev()
        .take(before)
        .last()
        .map_or(offset, |(i, _)| i);
    let end = text[offset..]
        .char_indices()
        .nth(after)
        .map_or(text.len(), |(i, _)| offset + i);

    &text[start..end]
}
