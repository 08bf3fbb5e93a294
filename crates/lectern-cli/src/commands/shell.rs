//! `lectern shell`: an interactive search session.
//!
//! Each input line is a query. Lines starting with `:` are session commands:
//!
//! | Command     | Effect                                  |
//! |-------------|-----------------------------------------|
//! | `:history`  | list recent queries, numbered from 1    |
//! | `:N`        | re-run history entry `N`                |
//! | `:help`     | show this list                          |
//! | `:quit`     | leave (end of input also leaves)        |
//!
//! The session owns one [`SearchHistory`]; it is dropped on exit.

use lectern_search::{SearchEngine, SearchHistory};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::commands::build_engine;
use crate::commands::render::render_history;
use crate::commands::search::{OutputFormat, search_to_string};
use crate::config::LecternConfig;
use crate::error::Result;

const PROMPT: &str = "lectern> ";

const HELP: &str = "\
Type a query to search.
  :history   list recent queries
  :N         re-run query N from :history
  :help      show this help
  :quit      exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    /// Run a query.
    Query(String),
    /// List history.
    History,
    /// Re-run the N-th history entry (1-based).
    Recall(usize),
    /// Show help.
    Help,
    /// Leave the session.
    Quit,
    /// Blank line.
    Empty,
    /// Unrecognised `:` command.
    Unknown(String),
}

impl ShellInput {
    /// Parse one line of input.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return if line.is_empty() {
                ShellInput::Empty
            } else {
                ShellInput::Query(line.to_string())
            };
        };

        match command.trim() {
            "history" | "h" => ShellInput::History,
            "help" | "?" => ShellInput::Help,
            "quit" | "q" | "exit" => ShellInput::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => ShellInput::Recall(n),
                _ => ShellInput::Unknown(line.to_string()),
            },
        }
    }
}

/// Run `lectern shell` on stdin/stdout.
pub async fn cmd_shell(config: &LecternConfig, plain: bool) -> Result<()> {
    let engine = build_engine(config).await?;
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let history = run_shell(&engine, stdin, &mut stdout, plain).await?;
    log::debug!("Shell closed after {} distinct queries", history.len());
    Ok(())
}

/// Drive a session over arbitrary input and output. Returns the final history.
pub async fn run_shell<R, W>(
    engine: &SearchEngine,
    input: R,
    output: &mut W,
    plain: bool,
) -> Result<SearchHistory>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let format = OutputFormat::from_flags(false, plain);
    let mut history = engine.new_history();
    let mut lines = input.lines();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            output.write_all(b"\n").await?;
            break;
        };

        let reply = match ShellInput::parse(&line) {
            ShellInput::Empty => continue,
            ShellInput::Quit => break,
            ShellInput::Help => HELP.to_string(),
            ShellInput::History => render_history(&history),
            ShellInput::Unknown(command) => {
                format!("Unknown command {command}. Type :help for commands.")
            }
            ShellInput::Recall(n) => match history.get(n - 1).map(str::to_string) {
                Some(query) => {
                    let rendered = search_to_string(engine, &mut history, &query, format).await?;
                    format!("> {query}\n{rendered}")
                }
                None => format!("No history entry {n}."),
            },
            ShellInput::Query(query) => {
                search_to_string(engine, &mut history, &query, format).await?
            }
        };

        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n\n").await?;
    }

    output.flush().await?;
    Ok(history)
}
