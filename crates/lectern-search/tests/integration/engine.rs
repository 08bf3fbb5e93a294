//! Engine behaviour around loading failures, configuration and stability.

use lectern_search::{SearchConfig, SearchHistory};

use crate::common::{TestHarness, sample_course};

#[tokio::test]
async fn test_unloadable_documents_are_skipped() {
    let engine = TestHarness::new()
        .document("C1", "ok.md", "RAG works here")
        .missing("C1", "gone.md")
        .binary("C1", "binary.md")
        .denied("C2", "secret.md")
        .document("C2", "blank.md", "  \n ")
        .document("C2", "also-ok.md", "rag again")
        .engine();

    let outcome = engine.execute("rag").await;
    let results = outcome.results().unwrap();

    assert_eq!(results.total(), 2);
    assert_eq!(results.documents_scanned, 6);

    let reasons: Vec<(&str, &str)> = results
        .skipped
        .iter()
        .map(|s| (s.document.as_str(), s.reason.as_str()))
        .collect();
    assert_eq!(
        reasons,
        vec![
            ("gone.md", "not_found"),
            ("binary.md", "unreadable_encoding"),
            ("secret.md", "permission_denied"),
            ("blank.md", "empty"),
        ]
    );
    assert!(results.skipped[2].message.contains("permission denied"));
}

#[tokio::test]
async fn test_search_is_idempotent() {
    let engine = sample_course().engine();
    let mut history = SearchHistory::new();

    let first = engine.search("api", &mut history).await;
    let second = engine.search("api", &mut history).await;

    assert_eq!(first, second);
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_snippets_are_contiguous_slices_of_source() {
    let text = "第一句。第二句讲 RAG。第三句。\n第四句 rag。";
    let engine = TestHarness::new().document("C1", "doc.md", text).engine();
    let highlighter = engine.highlighter();
    let matcher = lectern_search::Matcher::new("rag").unwrap();

    let outcome = engine.execute("rag").await;
    let results = outcome.results().unwrap();
    assert_eq!(results.total(), 2);

    for result in results.iter() {
        let plain = highlighter.strip(&result.snippet, &matcher).unwrap();
        assert!(text.contains(&plain), "{plain:?} not in source");
        assert_eq!(result.match_count, 2);
    }
}

#[tokio::test]
async fn test_configured_limits_apply() {
    let engine = TestHarness::new()
        .document("C1", "doc.md", "abc abc abc abc")
        .config(SearchConfig {
            min_query_chars: 4,
            max_snippets_per_document: 2,
            history_capacity: 1,
            ..Default::default()
        })
        .engine();
    let mut history = engine.new_history();

    assert!(engine.search("abc", &mut history).await.is_rejected());
    assert!(history.is_empty());

    let outcome = engine.search("abc ", &mut history).await;
    assert!(outcome.is_rejected());

    let outcome = engine.search("c ab", &mut history).await;
    assert_eq!(outcome.total(), 2);
    assert_eq!(history.entries().collect::<Vec<_>>(), vec!["c ab"]);

    engine.search("bc a", &mut history).await;
    assert_eq!(history.entries().collect::<Vec<_>>(), vec!["bc a"]);
}

#[tokio::test]
async fn test_result_paths_come_from_loader() {
    let engine = sample_course().engine();

    let outcome = engine.execute("LangChain").await;
    let result = outcome.results().unwrap().iter().next().unwrap().clone();

    assert_eq!(result.path, "memory://C2 LangChain/1.LangChain 入门.md");
    assert_eq!(result.id, "c2-langchain/1.langchain-入门");
    assert_eq!(result.document_ref().name, "1.LangChain 入门.md");
}

#[tokio::test]
async fn test_empty_catalog_completes_with_nothing() {
    let engine = TestHarness::new().engine();

    let outcome = engine.execute("RAG").await;
    let results = outcome.results().unwrap();

    assert!(results.is_empty());
    assert_eq!(results.documents_scanned, 0);
}
