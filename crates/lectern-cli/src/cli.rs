//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Lectern - search and read course notes from the terminal
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search course content once
    Search {
        /// Free-text query (case-insensitive, matched literally)
        query: String,

        /// Print results as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Print snippets without highlight markers
        #[arg(long)]
        plain: bool,
    },

    /// Interactive search session with history
    Shell {
        /// Print snippets without highlight markers
        #[arg(long)]
        plain: bool,
    },

    /// List chapters and documents
    Chapters,

    /// Print a document and its neighbours
    Open {
        /// Chapter name
        chapter: String,

        /// Document file name
        document: String,
    },

    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Get a value by dotted key (e.g. `search.min_query_chars`)
    Get {
        /// Dotted key
        key: String,
    },

    /// Set a value by dotted key
    Set {
        /// Dotted key
        key: String,
        /// New value (bool, integer, float or string)
        value: String,
    },

    /// Write a default config file
    Init {
        /// Target file (defaults to the standard location)
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=value` for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}
