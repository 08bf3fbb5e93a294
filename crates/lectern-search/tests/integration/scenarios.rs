//! End-to-end search scenarios.

use lectern_search::{SearchHistory, SearchOutcome};

use crate::common::{TestHarness, sample_course};

#[tokio::test]
async fn test_rag_definition_snippet() {
    let engine = TestHarness::new()
        .document(
            "C1",
            "rag.md",
            "RAG 是检索增强生成。它结合检索与生成。效果很好。",
        )
        .engine();
    let mut history = SearchHistory::new();

    let outcome = engine.search("rag", &mut history).await;
    let results = outcome.results().unwrap();

    assert_eq!(results.total(), 1);
    let result = results.iter().next().unwrap();
    assert_eq!(result.snippet, "**RAG** 是检索增强生成。它结合检索与生成");
    assert_eq!(result.match_count, 1);
    assert_eq!(history.entries().collect::<Vec<_>>(), vec!["rag"]);
}

#[tokio::test]
async fn test_single_character_query_is_rejected() {
    let engine = sample_course().engine();
    let mut history = SearchHistory::new();
    history.record("RAG");

    let outcome = engine.search("a", &mut history).await;

    let SearchOutcome::Rejected(rejection) = outcome else {
        panic!("Expected rejection, got {outcome:?}");
    };
    assert_eq!(rejection.min_chars, 2);
    assert_eq!(history.entries().collect::<Vec<_>>(), vec!["RAG"]);
}

#[tokio::test]
async fn test_five_matches_yield_three_snippets() {
    let engine = TestHarness::new()
        .document("C1", "api.md", "API 1。API 2。API 3。API 4。API 5。")
        .engine();

    let outcome = engine.execute("api").await;
    let results = outcome.results().unwrap();

    assert_eq!(results.chapters.len(), 1);
    assert_eq!(results.total(), 3);
    for result in results.iter() {
        assert_eq!(result.match_count, 5);
        assert_eq!(result.snippet, "**API** 1。**API** 2");
    }
}

#[tokio::test]
async fn test_eleventh_query_evicts_first() {
    let engine = sample_course().engine();
    let mut history = SearchHistory::new();

    for i in 1..=11 {
        engine.search(&format!("query {i}"), &mut history).await;
    }

    assert_eq!(history.len(), 10);
    assert_eq!(history.latest(), Some("query 11"));
    assert!(!history.contains("query 1"));
    assert!(history.contains("query 2"));
}

#[tokio::test]
async fn test_repeated_query_not_duplicated() {
    let engine = sample_course().engine();
    let mut history = SearchHistory::new();

    engine.search("RAG", &mut history).await;
    engine.search("API", &mut history).await;
    engine.search("RAG", &mut history).await;

    assert_eq!(history.entries().collect::<Vec<_>>(), vec!["API", "RAG"]);
}

#[tokio::test]
async fn test_results_grouped_in_catalog_order() {
    let engine = sample_course().engine();

    let outcome = engine.execute("api").await;
    let results = outcome.results().unwrap();

    let chapters: Vec<&str> = results.chapters.iter().map(|c| c.chapter.as_str()).collect();
    assert_eq!(chapters, vec!["C1 大模型基础", "C2 LangChain"]);

    let c1 = &results.chapters[0];
    assert_eq!(c1.len(), 2);
    assert!(c1.results.iter().all(|r| r.document == "2.API 调用.md"));
    assert!(c1.results.iter().all(|r| r.match_count == 2));
    assert_eq!(c1.results[0].snippet, "调用 **API** 之前先申请密钥。");

    let c2 = &results.chapters[1];
    assert_eq!(c2.results[0].document, "2.notes.txt");
    assert_eq!(c2.results[0].snippet, "plain notes about **api** keys");
}

#[tokio::test]
async fn test_notebooks_are_not_searched() {
    let engine = sample_course().engine();

    let outcome = engine.execute("RAG").await;
    let results = outcome.results().unwrap();

    assert!(results.iter().all(|r| !r.document.ends_with(".ipynb")));
    assert_eq!(results.documents_scanned, 4);
    assert_eq!(results.total(), 2);
}

#[tokio::test]
async fn test_context_sentences_on_both_sides() {
    let engine = sample_course().engine();

    let outcome = engine.execute("编排").await;
    let result = outcome.results().unwrap().iter().next().unwrap().clone();

    assert_eq!(result.chapter, "C2 LangChain");
    assert_eq!(result.snippet, "LangChain 是一个框架。它可以**编排** RAG 流程！");
}

#[tokio::test]
async fn test_no_results_still_recorded() {
    let engine = sample_course().engine();
    let mut history = SearchHistory::new();

    let outcome = engine.search("量子计算", &mut history).await;

    assert!(outcome.results().unwrap().is_empty());
    assert_eq!(history.latest(), Some("量子计算"));
}
