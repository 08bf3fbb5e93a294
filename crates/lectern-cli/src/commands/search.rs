//! `lectern search`: run one query and print the outcome.

use lectern_search::{SearchEngine, SearchHistory, SearchOutcome};

use crate::commands::build_engine;
use crate::commands::render::OutcomeRenderer;
use crate::config::LecternConfig;
use crate::error::Result;

/// Output format for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Highlighted text.
    Text,
    /// Text without highlight markers.
    Plain,
    /// Pretty-printed JSON of the whole outcome.
    Json,
}

impl OutputFormat {
    /// Pick a format from the `--json` / `--plain` flags.
    pub fn from_flags(json: bool, plain: bool) -> Self {
        match (json, plain) {
            (true, _) => OutputFormat::Json,
            (false, true) => OutputFormat::Plain,
            (false, false) => OutputFormat::Text,
        }
    }
}

/// Run `lectern search`.
pub async fn cmd_search(config: &LecternConfig, query: &str, format: OutputFormat) -> Result<()> {
    let engine = build_engine(config).await?;
    let mut history = engine.new_history();
    let output = search_to_string(&engine, &mut history, query, format).await?;
    println!("{output}");
    Ok(())
}

/// Run a query and render it in `format`.
pub async fn search_to_string(
    engine: &SearchEngine,
    history: &mut SearchHistory,
    query: &str,
    format: OutputFormat,
) -> Result<String> {
    let outcome = engine.search(query, history).await;
    format_outcome(engine, &outcome, format)
}

/// Render an outcome in `format`.
pub fn format_outcome(
    engine: &SearchEngine,
    outcome: &SearchOutcome,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Text | OutputFormat::Plain => {
            let renderer = OutcomeRenderer::new(
                engine.highlighter(),
                &engine.config().suggestions,
                format == OutputFormat::Plain,
            );
            Ok(renderer.render(outcome))
        }
    }
}
