//! ID normalization utilities.
//!
//! Chapter and document names in a course catalog are human-facing
//! ("C1 大型语言模型 LLM 介绍", "2.检索增强生成 RAG 简介.md"). These helpers turn
//! them into stable, lowercase kebab-case identifiers for machine output.

use std::path::Path;

/// Normalize an identifier to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Replaces underscores with hyphens
/// 4. Collapses multiple whitespace into single hyphens
///
/// # Examples
///
/// ```
/// use lectern_core::util::ids::normalize_id;
///
/// assert_eq!(normalize_id("Prompt Engineering"), "prompt-engineering");
/// assert_eq!(normalize_id("vector_store"), "vector-store");
/// assert_eq!(normalize_id("  Mixed   Case  "), "mixed-case");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

/// Compute a stable document identifier from its chapter and file name.
///
/// The file extension is dropped from the document part.
///
/// ```
/// use lectern_core::util::ids::document_id;
///
/// assert_eq!(
///     document_id("C3 Knowledge Base", "1.Word Vectors.md"),
///     "c3-knowledge-base/1.word-vectors"
/// );
/// ```
pub fn document_id(chapter: &str, document: &str) -> String {
    let stem = Path::new(document)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(document);
    format!("{}/{}", normalize_id(chapter), normalize_id(stem))
}
