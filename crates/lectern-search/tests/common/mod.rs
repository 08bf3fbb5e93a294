//! Common test utilities for lectern-search integration tests.

#![allow(dead_code)]

use lectern_content::{Chapter, DocumentCatalog, DocumentRef, MemoryContentLoader};
use lectern_search::{SearchConfig, SearchEngine};

/// Builds a catalog and an in-memory loader side by side.
pub struct TestHarness {
    chapters: Vec<Chapter>,
    /// Loader backing the catalog documents.
    pub loader: MemoryContentLoader,
    config: SearchConfig,
}

impl TestHarness {
    /// Creates an empty harness with default search configuration.
    pub fn new() -> Self {
        Self {
            chapters: Vec::new(),
            loader: MemoryContentLoader::new(),
            config: SearchConfig::default(),
        }
    }

    /// Adds a document with content, creating its chapter on first use.
    pub fn document(mut self, chapter: &str, name: &str, text: &str) -> Self {
        self.catalog_entry(chapter, name);
        self.loader.insert(DocumentRef::new(chapter, name), text);
        self
    }

    /// Lists a document in the catalog without giving it any content.
    pub fn missing(mut self, chapter: &str, name: &str) -> Self {
        self.catalog_entry(chapter, name);
        self
    }

    /// Lists a document whose content is not valid UTF-8.
    pub fn binary(mut self, chapter: &str, name: &str) -> Self {
        self.catalog_entry(chapter, name);
        self.loader
            .insert_bytes(DocumentRef::new(chapter, name), vec![0xff, 0xfe, 0x00, 0xc3]);
        self
    }

    /// Lists a document that cannot be read.
    pub fn denied(mut self, chapter: &str, name: &str) -> Self {
        self.catalog_entry(chapter, name);
        self.loader.deny(DocumentRef::new(chapter, name));
        self
    }

    /// Overrides the search configuration.
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the engine.
    pub fn engine(self) -> SearchEngine {
        let catalog = DocumentCatalog::new(self.chapters).expect("valid test catalog");
        SearchEngine::new(catalog, self.loader).with_config(self.config)
    }

    fn catalog_entry(&mut self, chapter: &str, name: &str) {
        match self.chapters.iter_mut().find(|c| c.name == chapter) {
            Some(c) => c.documents.push(name.to_string()),
            None => self.chapters.push(Chapter::new(chapter, [name])),
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A small course used by several tests.
pub fn sample_course() -> TestHarness {
    TestHarness::new()
        .document(
            "C1 大模型基础",
            "1.RAG 简介.md",
            "RAG 是检索增强生成。它结合检索与生成。效果很好。",
        )
        .document(
            "C1 大模型基础",
            "2.API 调用.md",
            "调用 API 之前先申请密钥。\nAPI 有速率限制。\n",
        )
        .document("C1 大模型基础", "3.练习.ipynb", "RAG RAG RAG")
        .document(
            "C2 LangChain",
            "1.LangChain 入门.md",
            "LangChain 是一个框架。它可以编排 RAG 流程！",
        )
        .document("C2 LangChain", "2.notes.txt", "plain notes about api keys")
}
