//! Command implementations.
//!
//! Every command builds its collaborators from [`LecternConfig`]: the catalog
//! (a catalog file when configured, the built-in course outline otherwise) and
//! a filesystem loader rooted at the content directory.

pub mod chapters;
pub mod open;
pub mod render;
pub mod search;
pub mod shell;

use std::sync::Arc;

use lectern_content::{ContentLoader, DocumentCatalog, FsContentLoader};
use lectern_search::SearchEngine;

use crate::config::LecternConfig;
use crate::error::Result;

pub use chapters::cmd_chapters;
pub use open::cmd_open;
pub use search::cmd_search;
pub use shell::cmd_shell;

/// Load the catalog named by the config, or the built-in outline.
pub async fn load_catalog(config: &LecternConfig) -> Result<DocumentCatalog> {
    match config.catalog_path() {
        Some(path) => {
            log::debug!("Loading catalog from {}", path.display());
            Ok(DocumentCatalog::load(&path).await?)
        }
        None => {
            log::debug!("Using built-in course catalog");
            Ok(DocumentCatalog::default())
        }
    }
}

/// Filesystem loader rooted at the configured content directory.
pub fn content_loader(config: &LecternConfig) -> Arc<dyn ContentLoader> {
    let root = config.content_root();
    if !root.is_dir() {
        log::warn!("Content root {} is not a directory", root.display());
    }
    Arc::new(FsContentLoader::new(root))
}

/// Build a search engine from configuration.
pub async fn build_engine(config: &LecternConfig) -> Result<SearchEngine> {
    let catalog = load_catalog(config).await?;
    let engine = SearchEngine::from_shared(catalog, content_loader(config))
        .with_config(config.search.clone());
    log::debug!("Built {engine:?}");
    Ok(engine)
}
