//! Search, shell and open against a temporary course directory.

use std::path::Path;

use lectern_cli::LecternConfig;
use lectern_cli::commands::open::open_document;
use lectern_cli::commands::search::{OutputFormat, search_to_string};
use lectern_cli::commands::shell::run_shell;
use lectern_cli::commands::{build_engine, content_loader, load_catalog};
use lectern_core::ConfigManager;
use tempfile::TempDir;

const CATALOG: &str = r#"
[[chapters]]
name = "C1 基础"
documents = ["1.RAG.md", "2.练习.ipynb"]

[[chapters]]
name = "C2 进阶"
documents = ["1.API.md", "2.missing.md"]
"#;

fn write(path: &Path, content: &[u8]) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn course() -> (TempDir, LecternConfig) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("notebook");
    write(
        &root.join("C1 基础").join("1.RAG.md"),
        "\u{feff}RAG 是检索增强生成。它结合检索与生成。效果很好。".as_bytes(),
    );
    write(&root.join("C1 基础").join("2.练习.ipynb"), b"{\"cells\": [\"RAG\"]}");
    write(
        &root.join("C2 进阶").join("1.API.md"),
        "API 1。API 2。API 3。API 4。API 5。".as_bytes(),
    );
    write(&dir.path().join("catalog.toml"), CATALOG.as_bytes());

    let config_path = dir.path().join("config.toml");
    let config_toml = format!(
        "[content]\nroot = {:?}\ncatalog = {:?}\n",
        root.to_str().unwrap(),
        dir.path().join("catalog.toml").to_str().unwrap()
    );
    write(&config_path, config_toml.as_bytes());

    let config = LecternConfig::load(config_path.to_str()).unwrap();
    (dir, config)
}

#[tokio::test]
async fn test_search_course_on_disk() {
    let (_dir, config) = course();
    let engine = build_engine(&config).await.unwrap();
    let mut history = engine.new_history();

    let outcome = engine.search("rag", &mut history).await;
    let results = outcome.results().unwrap();

    assert_eq!(results.total(), 1);
    let result = results.iter().next().unwrap();
    assert_eq!(result.chapter, "C1 基础");
    assert_eq!(result.snippet, "**RAG** 是检索增强生成。它结合检索与生成");
    assert!(result.path.ends_with("1.RAG.md"));

    assert_eq!(results.skipped.len(), 1);
    assert_eq!(results.skipped[0].document, "2.missing.md");
    assert_eq!(results.skipped[0].reason, "not_found");
}

#[tokio::test]
async fn test_cap_and_json_output() {
    let (_dir, config) = course();
    let engine = build_engine(&config).await.unwrap();
    let mut history = engine.new_history();

    let json = search_to_string(&engine, &mut history, "API", OutputFormat::Json)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let results = value["chapters"][0]["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r["match_count"] == 5));
}

#[tokio::test]
async fn test_shell_session_on_disk() {
    let (_dir, config) = course();
    let engine = build_engine(&config).await.unwrap();
    let mut output = Vec::new();

    let input = "a\nrag\napi\n:history\n:quit\n";
    let history = run_shell(&engine, input.as_bytes(), &mut output, true)
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("too short"));
    assert!(output.contains("  1  api\n  2  rag"));
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn test_open_result_document() {
    let (_dir, config) = course();
    let catalog = load_catalog(&config).await.unwrap();
    let loader = content_loader(&config);

    let text = open_document(&catalog, loader.as_ref(), "C1 基础", "1.RAG.md")
        .await
        .unwrap();

    assert!(text.starts_with("C1 基础 / 1.RAG.md\n\nRAG 是检索增强生成。"));
    assert!(text.ends_with("Next: C1 基础/2.练习.ipynb"));
}

#[tokio::test]
async fn test_content_root_env_override_applies() {
    let (dir, mut config) = course();
    config.apply_env_overrides(|key| {
        (key == "LECTERN_CONTENT_ROOT")
            .then(|| dir.path().join("elsewhere").display().to_string())
    });

    let engine = build_engine(&config).await.unwrap();
    let outcome = engine.execute("rag").await;
    let results = outcome.results().unwrap();

    assert!(results.is_empty());
    assert_eq!(results.skipped.len(), 3);
}
