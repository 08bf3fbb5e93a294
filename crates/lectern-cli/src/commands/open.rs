//! `lectern open`: print one document with links to its neighbours.
//!
//! This is where a search result leads: the `(chapter, document)` pair of a
//! result is exactly the arguments this command takes.

use lectern_content::{ContentLoader, DocumentCatalog};

use crate::commands::render::render_document;
use crate::commands::{content_loader, load_catalog};
use crate::config::LecternConfig;
use crate::error::Result;

/// Run `lectern open`.
pub async fn cmd_open(config: &LecternConfig, chapter: &str, document: &str) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let loader = content_loader(config);
    println!(
        "{}",
        open_document(&catalog, loader.as_ref(), chapter, document).await?
    );
    Ok(())
}

/// Resolve, load and render a document.
pub async fn open_document(
    catalog: &DocumentCatalog,
    loader: &dyn ContentLoader,
    chapter: &str,
    document: &str,
) -> Result<String> {
    let doc = catalog.resolve(chapter, document)?;
    let text = loader.load(&doc).await?;
    Ok(render_document(catalog, &doc, &text))
}
