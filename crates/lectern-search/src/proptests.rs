//! Property-based tests for matching, snippets, highlighting and history.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use crate::{
        Highlighter, Matcher, SearchEngine, SearchHistory, SnippetExtractor, extract, find_all,
    };
    use lectern_content::{Chapter, DocumentCatalog, MemoryContentLoader};
    use proptest::prelude::*;

    fn naive_count(text: &str, query: &str) -> usize {
        let text = text.to_ascii_lowercase();
        let query = query.to_ascii_lowercase();
        (0..text.len())
            .filter(|&i| text[i..].starts_with(&query))
            .count()
    }

    fn engine(text: &str) -> SearchEngine {
        let catalog = DocumentCatalog::new(vec![Chapter::new("C1", ["doc.md"])]).unwrap();
        let loader = MemoryContentLoader::new().with_document("C1", "doc.md", text);
        SearchEngine::new(catalog, loader)
    }

    proptest! {
        #[test]
        fn test_match_count_equals_overlapping_occurrences(
            text in "[abAB ]{0,40}",
            query in "[abAB]{1,3}",
        ) {
            prop_assert_eq!(find_all(&text, &query).len(), naive_count(&text, &query));
        }

        #[test]
        fn test_offsets_point_at_query(
            text in "[ab检索。\n ]{0,40}",
            query in "[ab检]{1,2}",
        ) {
            let matcher = Matcher::new(&query).unwrap();
            for offset in matcher.find_all(&text) {
                prop_assert!(matcher.is_match(&text[offset..]));
                prop_assert!(text.is_char_boundary(offset));
            }
        }

        #[test]
        fn test_snippet_is_contiguous_and_contains_query(
            text in "[ab xy。！？\n]{0,60}",
            query in "[ab]{1,2}",
        ) {
            let matcher = Matcher::new(&query).unwrap();
            for offset in matcher.find_all(&text) {
                let snippet = extract(&text, &query, offset);
                prop_assert!(text.contains(&snippet));
                prop_assert!(matcher.is_match(&snippet));
            }
        }

        #[test]
        fn test_snippet_fallback_contains_match(
            text in "[ab。]{0,40}",
            query in "[ab]。[ab]",
        ) {
            let matcher = Matcher::new(&query).unwrap();
            let extractor = SnippetExtractor::new(5);
            for offset in matcher.find_all(&text) {
                let snippet = extractor.extract(&text, &matcher, offset);
                prop_assert!(text.contains(&snippet));
                prop_assert!(matcher.is_match(&snippet));
            }
        }

        #[test]
        fn test_highlight_strip_roundtrip(
            text in "[a-zA-Z 。]{0,40}",
            query in "[a-z]{1,3}",
        ) {
            let matcher = Matcher::new(&query).unwrap();
            let highlighter = Highlighter::default();
            let marked = highlighter.highlight(&text, &matcher);
            prop_assert_eq!(highlighter.strip(&marked, &matcher).unwrap(), text);
        }

        #[test]
        fn test_history_bounded_and_distinct(
            queries in proptest::collection::vec("[a-c]{1,2}", 0..40),
        ) {
            let mut history = SearchHistory::new();
            for query in &queries {
                history.record(query);
            }
            prop_assert!(history.len() <= history.capacity());
            let distinct: HashSet<&str> = history.entries().collect();
            prop_assert_eq!(distinct.len(), history.len());
            if let Some(last) = queries.last() {
                prop_assert!(history.contains(last));
            }
        }

        #[test]
        fn test_short_query_leaves_history_unchanged(query in "[a-z ]?") {
            let engine = engine("a b c");
            let mut history = SearchHistory::new();
            history.record("existing");
            let before = history.clone();

            let outcome = tokio_test::block_on(engine.search(&query, &mut history));
            prop_assert!(outcome.is_rejected());
            prop_assert_eq!(history, before);
        }

        #[test]
        fn test_search_is_idempotent(
            text in "[ab xy。\n]{0,60}",
            query in "[ab]{2,3}",
        ) {
            let engine = engine(&text);
            let first = tokio_test::block_on(engine.execute(&query));
            let second = tokio_test::block_on(engine.execute(&query));
            prop_assert_eq!(first, second);
        }
    }
}
