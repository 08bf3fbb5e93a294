//! Terminal rendering of search outcomes, catalogs and documents.

use std::fmt::Write as _;

use lectern_content::{DocumentCatalog, DocumentRef};
use lectern_search::{Highlighter, Matcher, SearchHistory, SearchOutcome, SearchResults};

/// Renders search outcomes as text.
#[derive(Debug, Clone)]
pub struct OutcomeRenderer<'a> {
    highlighter: Highlighter,
    suggestions: &'a [String],
    plain: bool,
}

impl<'a> OutcomeRenderer<'a> {
    /// Create a renderer. With `plain`, highlight markers are stripped.
    pub fn new(highlighter: Highlighter, suggestions: &'a [String], plain: bool) -> Self {
        Self {
            highlighter,
            suggestions,
            plain,
        }
    }

    /// Render one outcome.
    pub fn render(&self, outcome: &SearchOutcome) -> String {
        match outcome {
            SearchOutcome::Rejected(rejection) => format!(
                "Query \"{}\" is too short: enter at least {} characters.",
                rejection.query, rejection.min_chars
            ),
            SearchOutcome::Completed(results) if results.is_empty() => {
                self.render_empty(results)
            }
            SearchOutcome::Completed(results) => self.render_results(results),
        }
    }

    fn render_results(&self, results: &SearchResults) -> String {
        let matcher = if self.plain {
            Matcher::new(&results.query).ok()
        } else {
            None
        };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "Found {} for \"{}\"",
            plural(results.total(), "result"),
            results.query
        );

        for group in &results.chapters {
            let _ = writeln!(out, "\n{} ({})", group.chapter, group.len());
            let mut last_document: Option<&str> = None;
            for result in &group.results {
                if last_document != Some(result.document.as_str()) {
                    let _ = writeln!(
                        out,
                        "  {} ({})",
                        result.document,
                        plural(result.match_count, "match")
                    );
                    last_document = Some(result.document.as_str());
                }
                let snippet = match &matcher {
                    Some(m) => self
                        .highlighter
                        .strip(&result.snippet, m)
                        .unwrap_or_else(|_| result.snippet.clone()),
                    None => result.snippet.clone(),
                };
                for line in snippet.lines() {
                    let _ = writeln!(out, "    {line}");
                }
            }
        }

        self.render_skipped(results, &mut out);
        out.trim_end().to_string()
    }

    fn render_empty(&self, results: &SearchResults) -> String {
        let mut out = format!("No results for \"{}\".", results.query);
        if !self.suggestions.is_empty() {
            let _ = write!(out, "\nTry: {}", self.suggestions.join(", "));
        }
        self.render_skipped(results, &mut out);
        out
    }

    fn render_skipped(&self, results: &SearchResults, out: &mut String) {
        if !results.skipped.is_empty() {
            let _ = write!(
                out,
                "\n\n({} could not be read; run with --verbose for details)",
                plural(results.skipped.len(), "document")
            );
        }
    }
}

/// Render the catalog, marking documents that are not searched.
pub fn render_catalog(catalog: &DocumentCatalog) -> String {
    let mut out = String::new();
    for chapter in catalog.chapters() {
        let _ = writeln!(out, "{}", chapter.name);
        for name in &chapter.documents {
            let kind = DocumentRef::new(chapter.name.as_str(), name.as_str()).kind();
            if kind.is_searchable() {
                let _ = writeln!(out, "  {name}");
            } else {
                let _ = writeln!(out, "  {name}  [{kind}, not searched]");
            }
        }
    }
    out.trim_end().to_string()
}

/// Render a document with links to its neighbours.
pub fn render_document(catalog: &DocumentCatalog, doc: &DocumentRef, text: &str) -> String {
    let mut out = format!("{} / {}\n\n{}\n", doc.chapter, doc.name, text.trim_end());
    let previous = catalog.previous(doc);
    let next = catalog.next(doc);
    if previous.is_some() || next.is_some() {
        out.push('\n');
    }
    if let Some(previous) = previous {
        let _ = writeln!(out, "Previous: {previous}");
    }
    if let Some(next) = next {
        let _ = writeln!(out, "Next: {next}");
    }
    out.trim_end().to_string()
}

/// Render history entries numbered from 1, most recent first.
pub fn render_history(history: &SearchHistory) -> String {
    if history.is_empty() {
        return "No searches yet.".to_string();
    }
    history
        .entries()
        .enumerate()
        .map(|(i, query)| format!("{:>3}  {query}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {noun}"),
        (n, "match") => format!("{n} matches"),
        (n, _) => format!("{n} {noun}s"),
    }
}
