//! Integration tests for reading catalogs from disk.

use lectern_content::{DocumentCatalog, DocumentRef};

#[tokio::test]
async fn test_load_catalog_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[[chapters]]
name = "C1 Introduction"
documents = ["1.Overview.md", "2.Setup.ipynb"]

[[chapters]]
name = "C2 Retrieval"
documents = ["1.Vectors.md"]
"#,
    )
    .unwrap();

    let catalog = DocumentCatalog::load(&path).await.unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.next(&DocumentRef::new("C1 Introduction", "2.Setup.ipynb")),
        Some(DocumentRef::new("C2 Retrieval", "1.Vectors.md"))
    );
}

#[tokio::test]
async fn test_load_missing_catalog_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = DocumentCatalog::load(dir.path().join("absent.toml"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("absent.toml"));
}

#[tokio::test]
async fn test_load_invalid_catalog_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "[[chapters]]\ndocuments = [\"a.md\"]\n").unwrap();

    // `name` is required
    assert!(DocumentCatalog::load(&path).await.is_err());
}
