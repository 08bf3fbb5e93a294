//! Integration tests for the filesystem content loader.

use lectern_content::{ContentLoader, DocumentRef, FsContentLoader, LoadError};

fn write(root: &std::path::Path, chapter: &str, name: &str, bytes: &[u8]) {
    let dir = root.join(chapter);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(name), bytes).unwrap();
}

#[tokio::test]
async fn test_loads_utf8_document_with_spaces_in_names() {
    let dir = tempfile::TempDir::new().unwrap();
    write(
        dir.path(),
        "C1 大型语言模型 LLM 介绍",
        "2.检索增强生成 RAG 简介.md",
        "RAG 是检索增强生成。".as_bytes(),
    );

    let loader = FsContentLoader::new(dir.path());
    let doc = DocumentRef::new("C1 大型语言模型 LLM 介绍", "2.检索增强生成 RAG 简介.md");
    assert_eq!(loader.load(&doc).await.unwrap(), "RAG 是检索增强生成。");
}

#[tokio::test]
async fn test_empty_file_is_typed_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path(), "C1", "empty.md", b"");
    write(dir.path(), "C1", "blank.md", b"\n\n   \n");

    let loader = FsContentLoader::new(dir.path());
    for name in ["empty.md", "blank.md"] {
        let err = loader.load(&DocumentRef::new("C1", name)).await.unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }), "{name}: {err}");
    }
}

#[tokio::test]
async fn test_non_utf8_file_is_encoding_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    // "你好" in GBK
    write(dir.path(), "C1", "gbk.md", &[0xC4, 0xE3, 0xBA, 0xC3]);

    let loader = FsContentLoader::new(dir.path());
    let err = loader
        .load(&DocumentRef::new("C1", "gbk.md"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::UnreadableEncoding { .. }));
}

#[tokio::test]
async fn test_directory_in_place_of_file_is_io_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("C1").join("folder.md")).unwrap();

    let loader = FsContentLoader::new(dir.path());
    let err = loader
        .load(&DocumentRef::new("C1", "folder.md"))
        .await
        .unwrap_err();
    assert!(!matches!(err, LoadError::NotFound { .. }));
}
