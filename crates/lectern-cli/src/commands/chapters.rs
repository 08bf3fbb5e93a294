//! `lectern chapters`: print the course outline.

use crate::commands::load_catalog;
use crate::commands::render::render_catalog;
use crate::config::LecternConfig;
use crate::error::Result;

/// Run `lectern chapters`.
pub async fn cmd_chapters(config: &LecternConfig) -> Result<()> {
    let catalog = load_catalog(config).await?;
    println!("{}", render_catalog(&catalog));
    Ok(())
}
